pub mod temp_path;
