use crate::config::Config;
use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;

pub fn clean(config: &Config) -> Result<()> {
    match fs::remove_dir_all(config.build.out_dir.as_str()) {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(Error::Io(e)),
        _ => Ok(()),
    }
}
