//! Upload simulation. No content is ever read; file names are appended to a
//! bounded list after the view's artificial processing delay.

use crate::mocks::CANNED_UPLOAD_NAMES;

/// Hard cap on retained uploads. Overflow is discarded silently.
pub const UPLOAD_CAP: usize = 5;

/// Appends `incoming` names to `existing`, never growing past [`UPLOAD_CAP`].
/// An empty selection falls back to the canned demo file names. Returns how
/// many of the incoming names were retained.
pub fn apply_upload(existing: &mut Vec<String>, incoming: Vec<String>) -> usize {
    let incoming = if incoming.is_empty() {
        CANNED_UPLOAD_NAMES
            .iter()
            .map(|name| name.to_string())
            .collect()
    } else {
        incoming
    };

    let room = UPLOAD_CAP.saturating_sub(existing.len());
    let retained = incoming.len().min(room);
    existing.extend(incoming.into_iter().take(room));
    retained
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("file-{i}.pdf")).collect()
    }

    #[test]
    fn cap_is_never_exceeded() {
        let mut files = Vec::new();
        let retained = apply_upload(&mut files, names(8));
        assert_eq!(retained, 5);
        assert_eq!(files.len(), UPLOAD_CAP);
        assert_eq!(files[0], "file-0.pdf");
        assert_eq!(files[4], "file-4.pdf");
    }

    #[test]
    fn overflow_is_discarded_across_batches() {
        let mut files = Vec::new();
        assert_eq!(apply_upload(&mut files, names(3)), 3);
        assert_eq!(apply_upload(&mut files, names(4)), 2);
        assert_eq!(files.len(), UPLOAD_CAP);
        // A full list swallows everything.
        assert_eq!(apply_upload(&mut files, names(2)), 0);
        assert_eq!(files.len(), UPLOAD_CAP);
    }

    #[test]
    fn empty_selection_uses_canned_names() {
        let mut files = Vec::new();
        let retained = apply_upload(&mut files, Vec::new());
        assert_eq!(retained, CANNED_UPLOAD_NAMES.len());
        assert_eq!(files, CANNED_UPLOAD_NAMES);
    }
}
