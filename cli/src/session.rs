use std::path::{Path, PathBuf};

use log::{debug, info};
use pixel_sorter_lib::{Raster, load_raster, process, save_raster};
use thiserror::Error;

use crate::error::{CliError, Result};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("No image loaded, load an image before sorting.")]
    NothingLoaded,

    #[error("No sorted image, sort the image before saving.")]
    NothingToSave,
}

/// What the shell currently holds.
#[derive(Debug, Default)]
pub enum SessionState {
    #[default]
    Empty,
    Loaded(Raster),
    Sorted(Raster),
}

///
/// The load, sort and save actions, and when each one is available.
///
/// |State|Sort|Save|
/// |---------|----|----|
/// | Empty   | no | no |
/// | Loaded  | yes| no |
/// | Sorted  | yes| yes|
///
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_sort(&self) -> bool {
        matches!(self.state, SessionState::Loaded(_) | SessionState::Sorted(_))
    }

    pub fn can_save(&self) -> bool {
        matches!(self.state, SessionState::Sorted(_))
    }

    /// The raster that would be shown to the user.
    pub fn current(&self) -> Option<&Raster> {
        match &self.state {
            SessionState::Empty => None,
            SessionState::Loaded(raster) | SessionState::Sorted(raster) => Some(raster),
        }
    }

    /// Load an image. A failed load drops whatever was held before.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        match load_raster(path) {
            Ok(raster) => {
                self.state = SessionState::Loaded(raster);
                Ok(())
            }
            Err(e) => {
                debug!("Load failed, resetting session.");
                self.state = SessionState::Empty;
                Err(CliError::Load(e))
            }
        }
    }

    /// Sort the current raster. Sorting an already sorted raster is allowed.
    pub fn sort(&mut self) -> Result<()> {
        let raster = self.current().ok_or(SessionError::NothingLoaded)?;
        let sorted = process(raster)?;
        info!(
            "Sorted image is {}x{}.",
            sorted.get_width(),
            sorted.get_height()
        );
        self.state = SessionState::Sorted(sorted);
        Ok(())
    }

    /// Write the sorted raster to `dir/name` and return that path.
    pub fn save(&self, dir: &Path, name: &str) -> Result<PathBuf> {
        let SessionState::Sorted(raster) = &self.state else {
            return Err(SessionError::NothingToSave.into());
        };

        let path = dir.join(name);
        debug!("Saving into {}.", path.display());
        save_raster(raster, &path).map_err(CliError::Save)?;
        Ok(path)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pixel_sorter_lib::Argb;

    fn write_input(dir: &Path) -> PathBuf {
        let path = dir.join("input.png");
        let raster = Raster::new(
            3,
            1,
            vec![
                Argb::from_channels(255, 10, 20, 30),
                Argb::from_channels(0, 99, 99, 99),
                Argb::from_channels(255, 50, 60, 70),
            ],
        )
        .unwrap();
        save_raster(&raster, &path).unwrap();
        path
    }

    #[test]
    fn test_empty_session() {
        let session = Session::new();
        assert!(!session.can_sort());
        assert!(!session.can_save());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_sort_before_load() {
        let mut session = Session::new();
        assert!(matches!(
            session.sort(),
            Err(CliError::Session(SessionError::NothingLoaded))
        ));
    }

    #[test]
    fn test_save_before_sort() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new();
        session.load(&write_input(dir.path())).unwrap();
        assert!(session.can_sort());
        assert!(!session.can_save());
        assert!(matches!(
            session.save(dir.path(), "out.png"),
            Err(CliError::Session(SessionError::NothingToSave))
        ));
    }

    #[test]
    fn test_full_flow() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new();
        session.load(&write_input(dir.path())).unwrap();
        session.sort().unwrap();
        assert!(session.can_save());

        let path = session
            .save(dir.path(), pixel_sorter_lib::DEFAULT_OUTPUT_NAME)
            .unwrap();
        assert_eq!(path, dir.path().join("sorted-image.png"));

        let saved = load_raster(&path).unwrap();
        assert_eq!(
            saved.pixels(),
            &[
                Argb::from_channels(255, 50, 60, 70),
                Argb::from_channels(255, 10, 20, 30),
                Argb(0xFFFF_FFFF),
            ]
        );
    }

    #[test]
    fn test_failed_load_resets() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new();
        session.load(&write_input(dir.path())).unwrap();
        session.sort().unwrap();

        let result = session.load(&dir.path().join("missing.png"));
        assert!(matches!(result, Err(CliError::Load(_))));
        assert!(session.current().is_none());
        assert!(!session.can_sort());
        assert!(!session.can_save());
    }

    #[test]
    fn test_save_failure_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new();
        session.load(&write_input(dir.path())).unwrap();
        session.sort().unwrap();

        let result = session.save(&dir.path().join("missing"), "out.png");
        assert!(matches!(result, Err(CliError::Save(_))));
        assert!(session.can_save());
    }
}
