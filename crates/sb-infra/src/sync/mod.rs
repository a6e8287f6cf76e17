mod json_file_remote;

pub use json_file_remote::JsonFileRemote;
