// src/utils/cache.rs
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;

use crate::io::reader::{read_image, ImageBands};

/// Cache of loaded images keyed by path, for batch runs where several
/// jobs reference the same input. Band buffers are shared, not copied.
pub struct ImageCache {
    images: Mutex<HashMap<PathBuf, Arc<ImageBands>>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self {
            images: Mutex::new(HashMap::new()),
        }
    }

    pub fn get<P: AsRef<Path>>(&self, path: P) -> Result<Arc<ImageBands>> {
        let path_buf = path.as_ref().to_path_buf();

        if let Some(image) = self.images.lock().get(&path_buf) {
            return Ok(Arc::clone(image));
        }

        // Not in cache; read outside the lock, it can take a while.
        let image = Arc::new(read_image(path.as_ref())?);
        self.images
            .lock()
            .insert(path_buf, Arc::clone(&image));
        Ok(image)
    }

    pub fn clear(&self) {
        self.images.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.images.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.lock().is_empty()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}
