//! Load state for data fetched by a page.
//!
//! DESIGN
//! ======
//! Pages keep one `RwSignal<Loadable<T>>` per fetched resource. A failed
//! reload keeps the previous data visible next to the error message.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use gate::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct Loadable<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None }
    }
}

impl<T> Loadable<T> {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn settle(&mut self, result: Result<T, ApiError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => self.error = Some(err.display_message()),
        }
    }
}
