use super::filter::VisibleSet;
use super::GalleryError;
use crate::catalog::{MediaId, MediaItem};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LightboxState {
    #[default]
    Closed,
    /// `index` is an offset into the visible set; `id` pins the displayed
    /// item so the index can be re-resolved when the set changes.
    Open { index: usize, id: MediaId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxCommand {
    Close,
    Prev,
    Next,
}

impl LightboxCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(LightboxCommand::Close),
            "ArrowLeft" => Some(LightboxCommand::Prev),
            "ArrowRight" => Some(LightboxCommand::Next),
            _ => None,
        }
    }
}

/// What `reconcile` did to an open lightbox after the visible set changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconciled {
    Unchanged,
    Moved { from: usize, to: usize },
    Closed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightboxNavigator {
    state: LightboxState,
}

impl LightboxNavigator {
    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open { index, .. } => Some(index),
            LightboxState::Closed => None,
        }
    }

    pub fn current<'a>(&self, visible: &'a VisibleSet) -> Option<&'a MediaItem> {
        self.current_index().and_then(|i| visible.get(i))
    }

    pub fn open(&mut self, visible: &VisibleSet, id: &MediaId) -> Result<usize, GalleryError> {
        let index = visible
            .position(id)
            .ok_or_else(|| GalleryError::NotVisible(id.clone()))?;
        self.state = LightboxState::Open { index, id: id.clone() };
        Ok(index)
    }

    pub fn next(&mut self, visible: &VisibleSet) -> Option<usize> {
        self.step(visible, true)
    }

    pub fn prev(&mut self, visible: &VisibleSet) -> Option<usize> {
        self.step(visible, false)
    }

    /// Returns whether the lightbox was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = LightboxState::Closed;
        was_open
    }

    /// Applies a command and returns the new index, if still open.
    pub fn apply(&mut self, command: LightboxCommand, visible: &VisibleSet) -> Option<usize> {
        match command {
            LightboxCommand::Close => {
                self.close();
                None
            }
            LightboxCommand::Prev => self.prev(visible),
            LightboxCommand::Next => self.next(visible),
        }
    }

    /// Re-resolves the displayed item against a new visible set, closing the
    /// lightbox if that item is gone.
    pub fn reconcile(&mut self, visible: &VisibleSet) -> Reconciled {
        let (from, id) = match &self.state {
            LightboxState::Open { index, id } => (*index, id.clone()),
            LightboxState::Closed => return Reconciled::Unchanged,
        };
        match visible.position(&id) {
            Some(to) if to == from => Reconciled::Unchanged,
            Some(to) => {
                self.state = LightboxState::Open { index: to, id };
                Reconciled::Moved { from, to }
            }
            None => {
                self.state = LightboxState::Closed;
                Reconciled::Closed
            }
        }
    }

    fn step(&mut self, visible: &VisibleSet, forward: bool) -> Option<usize> {
        let len = visible.len();
        let index = self.current_index()?;
        if len == 0 {
            return None;
        }
        let index = index.min(len - 1);
        let next = if forward { (index + 1) % len } else { (index + len - 1) % len };
        let item = visible.get(next)?;
        self.state = LightboxState::Open { index: next, id: item.id.clone() };
        Some(next)
    }
}

/// Turns a touch start/end pair into a navigation command.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Swiping left goes forward, swiping right goes back. Motions not longer
    /// than `threshold` are ignored.
    pub fn finish(&mut self, end_x: f64, threshold: f64) -> Option<LightboxCommand> {
        let start = self.start_x.take()?;
        let diff = start - end_x;
        if diff.abs() <= threshold {
            return None;
        }
        Some(if diff > 0.0 { LightboxCommand::Next } else { LightboxCommand::Prev })
    }
}

/// What the lightbox should do with its fade timer after the requested item
/// changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeStep {
    Unchanged,
    /// Fade out and schedule the swap to the requested item.
    Start,
    /// The requested item is already on screen; drop the pending swap.
    Cancel,
}

/// The item on screen and the one a running cross-fade will swap in.
#[derive(Clone, Debug, PartialEq)]
pub struct CrossFade {
    shown: MediaId,
    pending: Option<MediaId>,
}

impl CrossFade {
    pub fn new(shown: MediaId) -> Self {
        Self { shown, pending: None }
    }

    pub fn shown(&self) -> &MediaId {
        &self.shown
    }

    pub fn is_fading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn request(&mut self, id: &MediaId) -> FadeStep {
        if *id == self.shown {
            match self.pending.take() {
                Some(_) => FadeStep::Cancel,
                None => FadeStep::Unchanged,
            }
        } else if self.pending.as_ref() == Some(id) {
            FadeStep::Unchanged
        } else {
            self.pending = Some(id.clone());
            FadeStep::Start
        }
    }

    /// Called when the fade timer for `id` fires. Returns false if that swap
    /// was superseded or cancelled in the meantime.
    pub fn complete(&mut self, id: &MediaId) -> bool {
        if self.pending.as_ref() != Some(id) {
            return false;
        }
        self.pending = None;
        self.shown = id.clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::gallery::filter::CategoryFilter;

    fn item(id: &str, category: Category) -> MediaItem {
        MediaItem {
            id: MediaId::new(id),
            category,
            title: id.to_string(),
            description: String::new(),
            image: String::new(),
        }
    }

    fn catalog() -> Vec<MediaItem> {
        let mut items = Vec::new();
        for i in 0..10 {
            let category = if i % 3 == 0 { Category::Paint } else { Category::Collision };
            items.push(item(&format!("m{}", i), category));
        }
        items
    }

    #[test]
    fn test_paint_scenario_cycles_back() {
        let catalog = catalog();
        let visible = VisibleSet::compute(&catalog, CategoryFilter::Only(Category::Paint));
        assert_eq!(visible.len(), 4);

        let mut lightbox = LightboxNavigator::default();
        let first = visible.get(0).unwrap().id.clone();
        assert_eq!(lightbox.open(&visible, &first), Ok(0));
        for _ in 0..4 {
            lightbox.next(&visible);
        }
        assert_eq!(lightbox.current_index(), Some(0));
    }

    #[test]
    fn test_full_cycle_from_any_start() {
        let catalog = catalog();
        let visible = VisibleSet::compute(&catalog, CategoryFilter::All);
        for start in 0..visible.len() {
            let mut lightbox = LightboxNavigator::default();
            lightbox.open(&visible, &visible.get(start).unwrap().id).unwrap();
            for _ in 0..visible.len() {
                lightbox.next(&visible);
            }
            assert_eq!(lightbox.current_index(), Some(start));
        }
    }

    #[test]
    fn test_prev_from_first_wraps_to_last() {
        let catalog = catalog();
        let visible = VisibleSet::compute(&catalog, CategoryFilter::All);
        let mut lightbox = LightboxNavigator::default();
        lightbox.open(&visible, &MediaId::new("m0")).unwrap();

        assert_eq!(lightbox.prev(&visible), Some(visible.len() - 1));
        assert_eq!(lightbox.current(&visible).unwrap().id, MediaId::new("m9"));
    }

    #[test]
    fn test_open_requires_visible_item() {
        let catalog = catalog();
        let visible = VisibleSet::compute(&catalog, CategoryFilter::Only(Category::Paint));
        let mut lightbox = LightboxNavigator::default();
        let err = lightbox.open(&visible, &MediaId::new("m1")).unwrap_err();
        assert_eq!(err, GalleryError::NotVisible(MediaId::new("m1")));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_navigation_while_closed_is_noop() {
        let catalog = catalog();
        let visible = VisibleSet::compute(&catalog, CategoryFilter::All);
        let mut lightbox = LightboxNavigator::default();
        assert_eq!(lightbox.next(&visible), None);
        assert_eq!(lightbox.prev(&visible), None);
        assert!(!lightbox.close());
    }

    #[test]
    fn test_empty_visible_set_is_noop() {
        let catalog = catalog();
        let full = VisibleSet::compute(&catalog, CategoryFilter::All);
        let empty = VisibleSet::default();
        let mut lightbox = LightboxNavigator::default();
        lightbox.open(&full, &MediaId::new("m2")).unwrap();

        assert_eq!(lightbox.next(&empty), None);
        assert_eq!(lightbox.current_index(), Some(2));
    }

    #[test]
    fn test_keyboard_mapping() {
        assert_eq!(LightboxCommand::from_key("Escape"), Some(LightboxCommand::Close));
        assert_eq!(LightboxCommand::from_key("ArrowLeft"), Some(LightboxCommand::Prev));
        assert_eq!(LightboxCommand::from_key("ArrowRight"), Some(LightboxCommand::Next));
        assert_eq!(LightboxCommand::from_key("Enter"), None);
    }

    #[test]
    fn test_apply_close() {
        let catalog = catalog();
        let visible = VisibleSet::compute(&catalog, CategoryFilter::All);
        let mut lightbox = LightboxNavigator::default();
        lightbox.open(&visible, &MediaId::new("m4")).unwrap();
        assert_eq!(lightbox.apply(LightboxCommand::Close, &visible), None);
        assert_eq!(lightbox.state(), &LightboxState::Closed);
    }

    #[test]
    fn test_reconcile_follows_item_identity() {
        let catalog = catalog();
        let all = VisibleSet::compute(&catalog, CategoryFilter::All);
        let paint = VisibleSet::compute(&catalog, CategoryFilter::Only(Category::Paint));
        let mut lightbox = LightboxNavigator::default();
        lightbox.open(&all, &MediaId::new("m6")).unwrap();

        assert_eq!(lightbox.reconcile(&paint), Reconciled::Moved { from: 6, to: 2 });
        assert_eq!(lightbox.current(&paint).unwrap().id, MediaId::new("m6"));
        assert_eq!(lightbox.reconcile(&paint), Reconciled::Unchanged);
    }

    #[test]
    fn test_reconcile_closes_when_item_filtered_out() {
        let catalog = catalog();
        let all = VisibleSet::compute(&catalog, CategoryFilter::All);
        let paint = VisibleSet::compute(&catalog, CategoryFilter::Only(Category::Paint));
        let mut lightbox = LightboxNavigator::default();
        lightbox.open(&all, &MediaId::new("m1")).unwrap();

        assert_eq!(lightbox.reconcile(&paint), Reconciled::Closed);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_swipe_threshold() {
        let mut swipe = SwipeTracker::default();
        swipe.start(200.0);
        assert_eq!(swipe.finish(100.0, 50.0), Some(LightboxCommand::Next));

        swipe.start(100.0);
        assert_eq!(swipe.finish(200.0, 50.0), Some(LightboxCommand::Prev));

        swipe.start(100.0);
        assert_eq!(swipe.finish(130.0, 50.0), None);

        // No start recorded.
        assert_eq!(swipe.finish(0.0, 50.0), None);
    }

    #[test]
    fn test_returning_to_shown_item_cancels_fade() {
        let a = MediaId::new("a");
        let b = MediaId::new("b");
        let mut fade = CrossFade::new(a.clone());

        assert_eq!(fade.request(&b), FadeStep::Start);
        assert!(fade.is_fading());
        assert_eq!(fade.request(&a), FadeStep::Cancel);
        assert!(!fade.is_fading());

        // The timer scheduled for b fires late.
        assert!(!fade.complete(&b));
        assert_eq!(fade.shown(), &a);
    }

    #[test]
    fn test_newer_request_supersedes_pending_fade() {
        let mut fade = CrossFade::new(MediaId::new("a"));
        fade.request(&MediaId::new("b"));
        assert_eq!(fade.request(&MediaId::new("c")), FadeStep::Start);

        assert!(!fade.complete(&MediaId::new("b")));
        assert!(fade.complete(&MediaId::new("c")));
        assert_eq!(fade.shown(), &MediaId::new("c"));
        assert_eq!(fade.request(&MediaId::new("c")), FadeStep::Unchanged);
    }
}
