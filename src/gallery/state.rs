use super::filter::{CategoryFilter, FilterController, FilterTimings};
use super::lightbox::{LightboxCommand, LightboxNavigator, Reconciled};
use crate::catalog::{MediaId, MediaItem};
use log::{debug, warn};
use std::rc::Rc;
use yew::Reducible;

pub enum GalleryAction {
    SetFilter(CategoryFilter),
    Reveal { generation: u64, id: MediaId },
    FinishExit { generation: u64 },
    Open(MediaId),
    Command(LightboxCommand),
}

/// Gallery page state behind `use_reducer`, so timer callbacks always act on
/// the latest filter and lightbox.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    pub filter: FilterController,
    pub lightbox: LightboxNavigator,
}

impl GalleryState {
    pub fn new(catalog: Rc<Vec<MediaItem>>, timings: FilterTimings) -> Self {
        Self {
            filter: FilterController::new(catalog, timings),
            lightbox: LightboxNavigator::default(),
        }
    }

    pub fn current_item(&self) -> Option<&MediaItem> {
        self.lightbox.current(self.filter.visible())
    }
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            GalleryAction::SetFilter(filter) => {
                debug!("Gallery filter -> {}", filter.tag());
                next.filter.set_filter(filter);
                match next.lightbox.reconcile(next.filter.visible()) {
                    Reconciled::Closed => debug!("Lightbox item filtered out, closing"),
                    Reconciled::Moved { from, to } => debug!("Lightbox index {} -> {}", from, to),
                    Reconciled::Unchanged => {}
                }
                true
            }
            GalleryAction::Reveal { generation, id } => next.filter.reveal(generation, &id),
            GalleryAction::FinishExit { generation } => next.filter.finish_exit(generation),
            GalleryAction::Open(id) => match next.lightbox.open(next.filter.visible(), &id) {
                Ok(index) => {
                    debug!("Lightbox open at {}", index);
                    true
                }
                Err(e) => {
                    warn!("{}", e);
                    false
                }
            },
            GalleryAction::Command(command) => {
                let was_open = next.lightbox.is_open();
                let index = next.lightbox.apply(command, next.filter.visible());
                debug!("Lightbox {:?} -> {:?}", command, index);
                was_open
            }
        };

        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn state() -> Rc<GalleryState> {
        let items = ["a", "b", "c", "d"]
            .iter()
            .enumerate()
            .map(|(i, id)| MediaItem {
                id: MediaId::new(*id),
                category: if i % 2 == 0 { Category::Paint } else { Category::Facility },
                title: id.to_string(),
                description: String::new(),
                image: String::new(),
            })
            .collect();
        Rc::new(GalleryState::new(
            Rc::new(items),
            FilterTimings { stagger_ms: 50, exit_ms: 300 },
        ))
    }

    #[test]
    fn test_open_and_navigate() {
        let s = state().reduce(GalleryAction::Open(MediaId::new("d")));
        assert_eq!(s.lightbox.current_index(), Some(3));
        let s = s.reduce(GalleryAction::Command(LightboxCommand::Next));
        assert_eq!(s.current_item().unwrap().id, MediaId::new("a"));
    }

    #[test]
    fn test_filter_change_reconciles_lightbox() {
        let s = state().reduce(GalleryAction::Open(MediaId::new("c")));
        let s = s.reduce(GalleryAction::SetFilter(CategoryFilter::Only(Category::Paint)));
        assert_eq!(s.lightbox.current_index(), Some(1));

        let s = s.reduce(GalleryAction::SetFilter(CategoryFilter::Only(Category::Facility)));
        assert!(!s.lightbox.is_open());
    }

    #[test]
    fn test_noop_actions_keep_same_state() {
        let s = state();
        let same = s.clone().reduce(GalleryAction::Command(LightboxCommand::Next));
        assert!(Rc::ptr_eq(&s, &same));

        let same = s.clone().reduce(GalleryAction::FinishExit { generation: 99 });
        assert!(Rc::ptr_eq(&s, &same));

        let same = s.clone().reduce(GalleryAction::Open(MediaId::new("missing")));
        assert!(Rc::ptr_eq(&s, &same));
    }

    #[test]
    fn test_generation_moves_only_on_filter_change() {
        let s = state();
        let start = s.filter.generation();
        let s = s.reduce(GalleryAction::Reveal { generation: start, id: MediaId::new("a") });
        let s = s.reduce(GalleryAction::Open(MediaId::new("a")));
        assert_eq!(s.filter.generation(), start);

        let s = s.reduce(GalleryAction::SetFilter(CategoryFilter::Only(Category::Paint)));
        assert_eq!(s.filter.generation(), start + 1);
    }

    #[test]
    fn test_reveal_shares_visible_items() {
        let s = state().reduce(GalleryAction::SetFilter(CategoryFilter::Only(Category::Paint)));
        let generation = s.filter.generation();
        let next = s.clone().reduce(GalleryAction::Reveal { generation, id: MediaId::new("a") });

        assert!(!Rc::ptr_eq(&s, &next));
        assert!(next.filter.visible().shares_storage(s.filter.visible()));
    }

    #[test]
    fn test_escape_closes() {
        let s = state().reduce(GalleryAction::Open(MediaId::new("a")));
        let s = s.reduce(GalleryAction::Command(LightboxCommand::Close));
        assert!(!s.lightbox.is_open());
    }
}
