use crate::draft::{AttachmentStatus, Draft};

/// Decides whether a draft has enough content to be published.
///
/// The composer only asks this when it is enabled; a disabled composer is
/// never submittable.
pub trait SubmitHeuristic: Send + Sync {
    fn accepts(&self, draft: &Draft) -> bool;
}

impl<F> SubmitHeuristic for F
where
    F: Fn(&Draft) -> bool + Send + Sync,
{
    fn accepts(&self, draft: &Draft) -> bool {
        self(draft)
    }
}

/// Accepts non-blank text or at least one uploaded photo.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentHeuristic;

impl SubmitHeuristic for ContentHeuristic {
    fn accepts(&self, draft: &Draft) -> bool {
        !draft.text.trim().is_empty()
            || draft
                .attachments
                .iter()
                .any(|a| a.status == AttachmentStatus::Complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{AttachmentRef, ClientId};

    #[test]
    fn test_blank_text_is_rejected() {
        let draft = Draft {
            text: "   \n".to_string(),
            ..Draft::default()
        };
        assert!(!ContentHeuristic.accepts(&draft));
    }

    #[test]
    fn test_text_is_accepted() {
        let draft = Draft {
            text: "TESTING".to_string(),
            ..Draft::default()
        };
        assert!(ContentHeuristic.accepts(&draft));
    }

    #[test]
    fn test_only_completed_photos_count() {
        let mut draft = Draft::default();
        draft
            .attachments
            .push(AttachmentRef::pending(ClientId::from("a1"), "a.jpg"));
        assert!(!ContentHeuristic.accepts(&draft));

        draft.attachments[0].status = AttachmentStatus::Complete;
        assert!(ContentHeuristic.accepts(&draft));
    }

    #[test]
    fn test_closures_are_heuristics() {
        let always = |_: &Draft| true;
        assert!(always.accepts(&Draft::default()));
    }
}
