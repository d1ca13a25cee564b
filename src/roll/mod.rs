use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
};
use thiserror::Error;
use tracing::debug;
use zip::{ZipArchive, read::ZipFile};

mod config;
pub mod models;
pub use config::*;
pub use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
}

#[derive(Default)]
pub enum Storage {
    #[default]
    None,
    Csv(PathBuf),
    Zip(PathBuf),
    Records(Vec<RollBallot>),
}

#[derive(Default)]
pub struct Roll {
    config: Config,
    storage: Storage,
}

impl Roll {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn from_csv(mut self, path: PathBuf) -> Self {
        self.storage = Storage::Csv(path);
        self
    }

    /// Roll exports ship as a zip holding the ballots csv next to the raw
    /// scrape artifacts. Only the ballots file is read.
    pub fn from_zip(mut self, path: PathBuf) -> Self {
        self.storage = Storage::Zip(path);
        self
    }

    pub fn from_records(mut self, records: Vec<RollBallot>) -> Self {
        self.storage = Storage::Records(records);
        self
    }

    /// Streams every ballot that carries a usable coordinate. Rows without a
    /// finite lat/lng are dropped here, before any consumer sees them, and
    /// the stream index is dense over the rows that survive.
    pub fn stream_ballots<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, RollBallot)),
    {
        match &self.storage {
            Storage::None => Ok(()),
            Storage::Csv(path) => stream_located(csv::Reader::from_path(path)?, f),
            Storage::Zip(path) => {
                let zip_file = File::open(path)?;
                let mut archive = ZipArchive::new(zip_file)?;
                let file = get_file(&mut archive, &self.config.ballots_path)?;
                stream_located(csv::Reader::from_reader(file), f)
            }
            Storage::Records(records) => {
                records
                    .iter()
                    .filter(|ballot| ballot.has_coordinate())
                    .cloned()
                    .enumerate()
                    .for_each(f);
                Ok(())
            }
        }
    }
}

fn stream_located<R, F>(mut reader: csv::Reader<R>, f: F) -> Result<(), self::Error>
where
    R: Read,
    F: FnMut((usize, RollBallot)),
{
    let mut dropped: usize = 0;
    reader
        .deserialize()
        .filter_map(|ballot| ballot.ok())
        .filter(|ballot: &RollBallot| {
            if ballot.has_coordinate() {
                true
            } else {
                dropped += 1;
                false
            }
        })
        .enumerate()
        .for_each(f);
    if dropped > 0 {
        debug!("Dropped {dropped} ballots without coordinates");
    }
    Ok(())
}

fn get_file<'a>(
    archive: &'a mut ZipArchive<File>,
    name: &'a str,
) -> Result<ZipFile<'a, File>, self::Error> {
    let index = archive
        .index_for_name(name)
        .ok_or(self::Error::FileNotFound(name.to_string()))?;
    let file = archive.by_index(index)?;
    Ok(file)
}
