use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    error::TranslateError,
    stats::Statistics,
    translator::{Translation, Translator},
};

/// Cloneable handle that lets several threads feed one translator.
///
/// A single mutex guards the whole pipeline, so each address is translated
/// start to finish before the next one is looked at.
#[derive(Clone)]
pub struct SharedTranslator<const FRAME_SIZE: usize> {
    inner: Arc<Mutex<Translator<FRAME_SIZE>>>,
}

impl<const FRAME_SIZE: usize> SharedTranslator<FRAME_SIZE> {
    pub fn new(translator: Translator<FRAME_SIZE>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(translator)),
        }
    }

    pub fn translate(&self, logical_address: i64) -> Result<Translation, TranslateError> {
        self.lock().translate(logical_address)
    }

    pub fn statistics(&self) -> Statistics {
        self.lock().statistics()
    }

    fn lock(&self) -> MutexGuard<'_, Translator<FRAME_SIZE>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
