use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds a sampled interface (and the heads above it) along a cross-section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InterfaceProfile {
    pub name: String,   // name of the model
    pub x: Vec<f64>,    // horizontal coordinate
    pub h: Vec<f64>,    // freshwater head
    pub zeta: Vec<f64>, // elevation of the interface

    /// Horizontal discharge (only available for some models)
    #[serde(default)]
    pub qx: Vec<f64>,
}

impl InterfaceProfile {
    /// Allocates a new structure
    pub fn new(name: &str, number_of_points: usize) -> Self {
        InterfaceProfile {
            name: name.to_string(),
            x: vec![0.0; number_of_points],
            h: vec![0.0; number_of_points],
            zeta: vec![0.0; number_of_points],
            qx: Vec::new(),
        }
    }

    /// Returns the number of points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if there are no points
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Reads a JSON file containing the profile
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let profile = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(profile)
    }

    /// Writes a JSON file with the profile
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
