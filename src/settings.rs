// merge debug settings into a vscode settings file
//
// the supplement document (debug settings shipped with the tools) is merged over the target
// document (the workspace's `.vscode/settings.json`) one level deep, and the result is written
// back to the target. missing or malformed documents fall back to an empty object; a problem
// with the supplement is reported, a problem with the target is not.
//
// there is no locking: two merges racing on the same target end with whichever wrote last.

use {
  log::{debug, info, warn},
  std::path::{Path, PathBuf},
  thiserror,
  crate::{
    document::{self, Loaded},
    merge::{self, Object},
  },
};

const MOD: &str = std::module_path!();

pub const DEFAULT_SUPPLEMENT_PATH: &str = "./tools/vscode_debug_settings.json";
pub const DEFAULT_TARGET_PATH: &str = ".vscode/settings.json";

#[derive(thiserror::Error, Debug)]
pub enum Error {

  #[error(transparent)]
  Fs(#[from] crate::fs::Error),

  #[error(transparent)]
  Document(#[from] document::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug)]
pub struct SettingsMerger {
  supplement: PathBuf,
  target: PathBuf,
}

impl Default for SettingsMerger {
  fn default() -> Self {
    Self::new()
  }
}

impl SettingsMerger {

  pub fn new() -> Self {
    Self {
      supplement: PathBuf::from(DEFAULT_SUPPLEMENT_PATH),
      target: PathBuf::from(DEFAULT_TARGET_PATH),
    }
  }

  pub fn supplement<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
    self.supplement = path.into();
    self
  }

  pub fn target<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
    self.target = path.into();
    self
  }

  pub fn supplement_path(&self) -> &Path { &self.supplement }

  pub fn target_path(&self) -> &Path { &self.target }

  fn load_supplement(&self) -> Result<Object> {
    let path = self.supplement.display();
    Ok(match document::load(&self.supplement)? {
      Loaded::Object(map) => map,
      Loaded::Missing => {
        warn!(target: MOD, "{} not found, no debug settings to add", path);
        Object::new()
      },
      Loaded::Malformed(reason) => {
        warn!(target: MOD, "Failed to parse {}, skipping it: {}", path, reason);
        Object::new()
      },
    })
  }

  fn load_target(&self) -> Result<Object> {
    let loaded = document::load(&self.target)?;
    if let Loaded::Malformed(reason) = &loaded {
      debug!(target: MOD, "Replacing unparseable {}: {}", self.target.display(), reason);
    }
    Ok(loaded.into_object())
  }

  pub fn merge(&self) -> Result<Object> {
    // merge the supplement over the target and write the target, returning what was written

    let supplement = self.load_supplement()?;
    info!(target: MOD, "{}", self.target.display());
    let mut settings = self.load_target()?;
    merge::update(&mut settings, supplement);
    document::save(&self.target, &settings)?;
    info!(target: MOD, "Updated {} successfully", self.target.display());
    Ok(settings)
  }
}
