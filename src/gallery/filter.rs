use super::GalleryError;
use crate::catalog::{Category, MediaId, MediaItem};
use std::rc::Rc;
use std::str::FromStr;

pub const ALL_TAG: &str = "all";

/// The single active gallery filter. Defaults to the wildcard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_TAG,
            CategoryFilter::Only(c) => c.tag(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Work",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// Tabs in display order: the wildcard first, then every category.
    pub fn tabs() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }
}

impl FromStr for CategoryFilter {
    type Err = GalleryError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        if tag == ALL_TAG {
            return Ok(CategoryFilter::All);
        }
        Category::from_tag(tag)
            .map(CategoryFilter::Only)
            .ok_or_else(|| GalleryError::UnknownCategory(tag.to_string()))
    }
}

/// Order-preserving subsequence of the catalog matching a filter. Shared
/// storage, so cloning the gallery state per action does not copy items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibleSet {
    items: Rc<[MediaItem]>,
}

impl VisibleSet {
    pub fn compute(catalog: &[MediaItem], filter: CategoryFilter) -> Self {
        Self {
            items: catalog
                .iter()
                .filter(|item| filter.matches(item.category))
                .cloned()
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn shares_storage(&self, other: &VisibleSet) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }

    pub fn position(&self, id: &MediaId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }
}

/// Presentation phase of one gallery tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemPhase {
    /// Removed from layout.
    Hidden,
    /// Faded out, still occupying layout until the exit timer fires.
    Exiting,
    /// In layout but transparent until its staggered reveal fires.
    Entering { delay_ms: u32 },
    Shown,
}

impl ItemPhase {
    pub fn in_layout(self) -> bool {
        !matches!(self, ItemPhase::Hidden)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterTimings {
    pub stagger_ms: u32,
    pub exit_ms: u32,
}

/// A tile as it should be rendered right now.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile<'a> {
    pub item: &'a MediaItem,
    pub phase: ItemPhase,
    /// Position within the current visible set, `None` while exiting.
    pub visible_index: Option<usize>,
}

/// Owns the active filter, the derived visible set and per-tile phases.
///
/// Every `set_filter` bumps the generation. Timer callbacks carry the
/// generation they were scheduled under and are ignored once it is stale,
/// so the last filter always decides final visibility.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterController {
    catalog: Rc<Vec<MediaItem>>,
    filter: CategoryFilter,
    visible: VisibleSet,
    phases: Vec<ItemPhase>,
    generation: u64,
    timings: FilterTimings,
}

impl FilterController {
    /// Starts under the wildcard with every tile entering, so the first
    /// render plays the staggered reveal.
    pub fn new(catalog: Rc<Vec<MediaItem>>, timings: FilterTimings) -> Self {
        let visible = VisibleSet::compute(&catalog, CategoryFilter::All);
        let phases = (0..catalog.len())
            .map(|i| ItemPhase::Entering { delay_ms: timings.stagger_ms * i as u32 })
            .collect();
        Self {
            catalog,
            filter: CategoryFilter::All,
            visible,
            phases,
            generation: 0,
            timings,
        }
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn timings(&self) -> FilterTimings {
        self.timings
    }

    pub fn phase(&self, id: &MediaId) -> Option<ItemPhase> {
        self.catalog
            .iter()
            .position(|item| &item.id == id)
            .map(|i| self.phases[i])
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.visible = VisibleSet::compute(&self.catalog, filter);
        self.generation += 1;

        let mut entering = 0u32;
        for (item, phase) in self.catalog.iter().zip(self.phases.iter_mut()) {
            *phase = if filter.matches(item.category) {
                let delay_ms = self.timings.stagger_ms * entering;
                entering += 1;
                ItemPhase::Entering { delay_ms }
            } else if phase.in_layout() {
                ItemPhase::Exiting
            } else {
                ItemPhase::Hidden
            };
        }
    }

    /// Staggered reveals still waiting to fire, with their delays.
    pub fn pending_reveals(&self) -> Vec<(MediaId, u32)> {
        self.catalog
            .iter()
            .zip(&self.phases)
            .filter_map(|(item, phase)| match phase {
                ItemPhase::Entering { delay_ms } => Some((item.id.clone(), *delay_ms)),
                _ => None,
            })
            .collect()
    }

    pub fn has_exiting(&self) -> bool {
        self.phases.iter().any(|p| *p == ItemPhase::Exiting)
    }

    /// Marks an entering tile as shown. Returns false for stale generations
    /// or tiles no longer entering.
    pub fn reveal(&mut self, generation: u64, id: &MediaId) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.catalog.iter().position(|item| &item.id == id) {
            Some(i) if matches!(self.phases[i], ItemPhase::Entering { .. }) => {
                self.phases[i] = ItemPhase::Shown;
                true
            }
            _ => false,
        }
    }

    /// Removes every exiting tile from layout.
    pub fn finish_exit(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        let mut changed = false;
        for phase in self.phases.iter_mut().filter(|p| **p == ItemPhase::Exiting) {
            *phase = ItemPhase::Hidden;
            changed = true;
        }
        changed
    }

    pub fn tiles(&self) -> Vec<Tile<'_>> {
        self.catalog
            .iter()
            .zip(&self.phases)
            .filter(|(_, phase)| phase.in_layout())
            .map(|(item, phase)| Tile {
                item,
                phase: *phase,
                visible_index: self.visible.position(&item.id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMINGS: FilterTimings = FilterTimings { stagger_ms: 50, exit_ms: 300 };

    fn item(id: &str, category: Category) -> MediaItem {
        MediaItem {
            id: MediaId::new(id),
            category,
            title: id.to_uppercase(),
            description: String::new(),
            image: format!("/{}.jpg", id),
        }
    }

    /// Ten items, four of them paint.
    fn catalog() -> Rc<Vec<MediaItem>> {
        Rc::new(vec![
            item("a", Category::Collision),
            item("b", Category::Paint),
            item("c", Category::Facility),
            item("d", Category::Paint),
            item("e", Category::Restoration),
            item("f", Category::Collision),
            item("g", Category::Paint),
            item("h", Category::AwardWinners),
            item("i", Category::Paint),
            item("j", Category::Collision),
        ])
    }

    fn ids(set: &VisibleSet) -> Vec<&str> {
        set.items().iter().map(|i| i.id.0.as_str()).collect()
    }

    #[test]
    fn test_category_filter_preserves_catalog_order() {
        let catalog = catalog();
        for category in Category::ALL {
            let set = VisibleSet::compute(&catalog, CategoryFilter::Only(category));
            assert!(set.items().iter().all(|i| i.category == category));
            let expected: Vec<&str> = catalog
                .iter()
                .filter(|i| i.category == category)
                .map(|i| i.id.0.as_str())
                .collect();
            assert_eq!(ids(&set), expected);
        }
    }

    #[test]
    fn test_wildcard_is_full_catalog() {
        let catalog = catalog();
        let set = VisibleSet::compute(&catalog, CategoryFilter::All);
        assert_eq!(set.items(), catalog.as_slice());
    }

    #[test]
    fn test_category_without_items_is_empty_not_error() {
        let catalog = catalog();
        let set = VisibleSet::compute(&catalog, CategoryFilter::Only(Category::Aluminum));
        assert!(set.is_empty());
    }

    #[test]
    fn test_parse_filter_tags() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "paint".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Paint))
        );
        assert_eq!(
            "spoilers".parse::<CategoryFilter>(),
            Err(GalleryError::UnknownCategory("spoilers".into()))
        );
    }

    #[test]
    fn test_tabs_start_with_wildcard() {
        let tabs: Vec<_> = CategoryFilter::tabs().collect();
        assert_eq!(tabs[0], CategoryFilter::All);
        assert_eq!(tabs.len(), Category::ALL.len() + 1);
    }

    #[test]
    fn test_set_filter_staggers_by_visible_index() {
        let mut controller = FilterController::new(catalog(), TIMINGS);
        controller.set_filter(CategoryFilter::Only(Category::Paint));

        let reveals = controller.pending_reveals();
        let delays: Vec<u32> = reveals.iter().map(|(_, d)| *d).collect();
        assert_eq!(delays, vec![0, 50, 100, 150]);
        assert_eq!(controller.visible().len(), 4);
        assert_eq!(controller.phase(&MediaId::new("a")), Some(ItemPhase::Exiting));
    }

    #[test]
    fn test_exit_then_hidden() {
        let mut controller = FilterController::new(catalog(), TIMINGS);
        controller.set_filter(CategoryFilter::Only(Category::Paint));
        let generation = controller.generation();

        assert!(controller.has_exiting());
        assert!(controller.finish_exit(generation));
        assert!(!controller.has_exiting());
        assert_eq!(controller.phase(&MediaId::new("a")), Some(ItemPhase::Hidden));
        assert_eq!(controller.tiles().len(), 4);
    }

    #[test]
    fn test_hidden_items_do_not_exit_again() {
        let mut controller = FilterController::new(catalog(), TIMINGS);
        controller.set_filter(CategoryFilter::Only(Category::Paint));
        controller.finish_exit(controller.generation());
        controller.set_filter(CategoryFilter::Only(Category::Facility));

        assert_eq!(controller.phase(&MediaId::new("a")), Some(ItemPhase::Hidden));
        assert_eq!(controller.phase(&MediaId::new("b")), Some(ItemPhase::Exiting));
    }

    #[test]
    fn test_stale_timers_are_ignored() {
        let mut controller = FilterController::new(catalog(), TIMINGS);
        controller.set_filter(CategoryFilter::Only(Category::Paint));
        let first = controller.generation();
        controller.set_filter(CategoryFilter::All);

        // The first filter's exit timer must not hide anything the second shows.
        assert!(!controller.finish_exit(first));
        assert!(!controller.reveal(first, &MediaId::new("b")));
        assert_eq!(controller.tiles().len(), 10);
        assert!(!controller.has_exiting());
    }

    #[test]
    fn test_reveal_marks_shown_once() {
        let mut controller = FilterController::new(catalog(), TIMINGS);
        let generation = controller.generation();
        let id = MediaId::new("c");

        assert!(controller.reveal(generation, &id));
        assert_eq!(controller.phase(&id), Some(ItemPhase::Shown));
        assert!(!controller.reveal(generation, &id));
    }

    #[test]
    fn test_tiles_carry_visible_index() {
        let mut controller = FilterController::new(catalog(), TIMINGS);
        controller.set_filter(CategoryFilter::Only(Category::Paint));
        let tiles = controller.tiles();

        let exiting = tiles.iter().find(|t| t.item.id.0 == "a").unwrap();
        assert_eq!(exiting.visible_index, None);
        let second_paint = tiles.iter().find(|t| t.item.id.0 == "d").unwrap();
        assert_eq!(second_paint.visible_index, Some(1));
    }

    #[test]
    fn test_empty_catalog() {
        let mut controller = FilterController::new(Rc::new(Vec::new()), TIMINGS);
        controller.set_filter(CategoryFilter::Only(Category::Paint));
        assert!(controller.visible().is_empty());
        assert!(controller.tiles().is_empty());
        assert!(controller.pending_reveals().is_empty());
    }
}
