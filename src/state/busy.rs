//! In-flight flags
//!
//! A view shows a spinner while loading and disables its submit and delete
//! buttons while their own request is outstanding.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusyState {
    loading: bool,
    submitting: bool,
    deleting: Option<String>,
    exporting: bool,
}

impl BusyState {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    /// Id of the record whose delete is in flight
    pub fn deleting(&self) -> Option<&str> {
        self.deleting.as_deref()
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting.is_some()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_exporting(&mut self, exporting: bool) {
        self.exporting = exporting;
    }

    /// Mark a submit as started; false if one is already running
    pub fn begin_submit(&mut self) -> bool {
        !std::mem::replace(&mut self.submitting, true)
    }

    pub fn end_submit(&mut self) {
        self.submitting = false;
    }

    /// Mark a delete of `id` as started; false if any delete is already running
    pub fn begin_delete(&mut self, id: &str) -> bool {
        if self.deleting.is_some() {
            return false;
        }
        self.deleting = Some(id.to_string());
        true
    }

    pub fn end_delete(&mut self) {
        self.deleting = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_flag_blocks_duplicates() {
        let mut busy = BusyState::default();
        assert!(busy.begin_submit());
        assert!(!busy.begin_submit());
        busy.end_submit();
        assert!(busy.begin_submit());
    }

    #[test]
    fn test_delete_flag_tracks_id() {
        let mut busy = BusyState::default();
        assert!(busy.begin_delete("e1"));
        assert_eq!(busy.deleting(), Some("e1"));
        assert!(!busy.begin_delete("e2"));
        busy.end_delete();
        assert!(!busy.is_deleting());
    }
}
