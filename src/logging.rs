use {chrono, fern};

#[derive(thiserror::Error, Debug)]
pub enum Error {

  #[error(transparent)] LogSetLogger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn level(quiet: bool, verbose: u8) -> log::LevelFilter {
  // map command line verbosity flags to a level filter

  match (quiet, verbose) {
    (true, _) => log::LevelFilter::Warn,
    (false, 0) => log::LevelFilter::Info,
    (false, 1) => log::LevelFilter::Debug,
    (false, _) => log::LevelFilter::Trace,
  }
}

pub fn setup<O>(level: log::LevelFilter, timestamps: bool, output: O) -> Result<()>
where
  O: Into<fern::Output>,
{
  Ok(fern::Dispatch
    ::new()
    .format(move |out, message, record| {
      if timestamps {
        out.finish(format_args!(
          "{0: <18} {1: >5} {2}",
          chrono::Local::now().format("%m/%d %H:%M:%S%.3f"),
          record.level(),
          message,
        ))
      } else {
        out.finish(format_args!("{0: >5} {1}", record.level(), message))
      }
    })
    .level(level)
    .chain(output)
    .apply()?)
}
