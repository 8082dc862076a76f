use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::{
    PoisonError,
    RwLock,
    RwLockReadGuard,
    RwLockWriteGuard
};

use serde_json;
use tracing::warn;

use super::managererror::{ManagerError, parse_json_value};


/// A keyed store of objects built from JSON documents.
///
/// Implementors decide how a JSON value turns into a key and a value; the
/// provided methods take care of bulk insertion and file loading.
pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> RwLockReadGuard<'_, HashMap<String, V>>;

    fn map_mut(&self) -> RwLockWriteGuard<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name).map_or(
            Err(ManagerError::map_elem_not_found(name)),
            |elem| Ok(elem.clone())
        )
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn len(&self) -> usize {
        self.map().len()
    }

    fn is_empty(&self) -> bool {
        self.map().is_empty()
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    /// Inserts every element that parses and skips the rest with a warning.
    /// Returns the number of skipped elements.
    fn insert_valid_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> usize {
        let mut skipped = 0;
        for (index, j) in json_vec.iter().enumerate() {
            if let Err(error) = self.insert_obj_from_json(j.clone()) {
                warn!(index, %error, "skipping malformed record");
                skipped += 1;
            }
        }
        skipped
    }

    fn read_json_vec(file_path: &Path) -> Result<Vec<serde_json::Value>, ManagerError> {
        let file = File::open(file_path).map_err(|source| ManagerError::IOError {
            path: file_path.to_path_buf(),
            source
        })?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            parse_json_value(json_value)
        } else {
            Ok(vec![json_value])
        }
    }

    fn from_reader(&self, file_path: &Path) -> Result<(), ManagerError> {
        let json_vec = Self::read_json_vec(file_path)?;
        self.insert_obj_from_json_vec(&json_vec)
    }
}


pub struct Manager<V> {
    map_lock: RwLock<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<(String, V), ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    /// `get_obj_from_json` returns the key together with the parsed value.
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<(String, V), ManagerError>) -> Manager<V> {
        Manager { map_lock: RwLock::new(HashMap::new()), get_obj_from_json }
    }

    pub fn insert(&self, name: String, value: V) {
        self.map_mut().insert(name, value);
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> RwLockReadGuard<'_, HashMap<String, V>> {
        self.map_lock.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn map_mut(&self) -> RwLockWriteGuard<'_, HashMap<String, V>> {
        self.map_lock.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let (name, v) = (self.get_obj_from_json)(json_value)?;
        self.map_mut().insert(name, v);
        Ok(())
    }
}
