pub mod case_studies;
