use {
  log::debug,
  std::{
    io::ErrorKind,
    path::{Path, PathBuf},
  },
  thiserror,
};

const MOD: &str = std::module_path!();

#[derive(thiserror::Error, Debug)]
pub enum Error {

  #[error("Failed to read `{0}`: {1}")]
  Read(PathBuf, #[source] std::io::Error),

  #[error("Failed to write `{0}`: {1}")]
  Write(PathBuf, #[source] std::io::Error),

  #[error("Failed to create directory `{0}`: {1}")]
  Mkdir(PathBuf, #[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Vec<u8>>> {
  // read a file, `None` if it does not exist

  let path = path.as_ref();
  match std::fs::read(path) {
    Ok(data) => Ok(Some(data)),
    Err(err) if err.kind() == ErrorKind::NotFound => {
      debug!(target: MOD, "Not found: {}", path.display());
      Ok(None)
    },
    Err(err) => Err(Error::Read(path.to_path_buf(), err)),
  }
}

#[inline]
pub fn dump<P: AsRef<Path>, D: AsRef<[u8]>>(path: P, data: D) -> Result<()> {
  let path = path.as_ref();
  std::fs::write(path, data).map_err(|e| Error::Write(path.to_path_buf(), e))
}

pub fn mkdir_parent<P: AsRef<Path>>(path: P) -> Result<()> {
  // create the parent directory of `path` and its ancestors

  let parent = match path.as_ref().parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => return Ok(()),
  };
  std::fs::create_dir_all(parent).map_err(|e| Error::Mkdir(parent.to_path_buf(), e))
}
