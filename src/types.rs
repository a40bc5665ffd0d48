//! Core data types for the map labeling session.
//!
//! This module defines the maps, labels, and pending-click structures, the
//! [`Atlas`] that holds every map's label sequence, and the [`Session`] state
//! container through which all mutations flow.

use crate::artwork::{self, MapSeed};
use crate::constants::PERCENT_MAX;
use uuid::Uuid;

/// Stable identifier of a map in the registry (e.g. `"world"`).
pub type MapId = String;

/// Unique identifier for labels. Time-ordered, so generation order is preserved.
pub type LabelId = Uuid;

/// The three mutually exclusive views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Landing page with the feature overview
    #[default]
    Home,
    /// Map gallery with the labeling surface
    Maps,
    /// Project description
    About,
}

/// A user-created text annotation anchored to a normalized point on a map.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Unique identifier within the owning map
    pub id: LabelId,
    /// User-supplied text, trimmed and never empty
    pub text: String,
    /// Horizontal position as a percentage of the map width
    pub x: f32,
    /// Vertical position as a percentage of the map height
    pub y: f32,
}

impl Label {
    /// Creates a new label with a fresh time-ordered ID.
    ///
    /// Coordinates are clamped into the normalized `[0, 100]` range.
    pub fn new(text: String, x: f32, y: f32) -> Self {
        Self {
            id: Uuid::now_v7(),
            text,
            x: clamp_percent(x),
            y: clamp_percent(y),
        }
    }
}

/// One labelable map and its ordered label sequence.
#[derive(Debug, Clone)]
pub struct MapData {
    /// Stable identifier, also the artwork key
    pub id: MapId,
    /// Display name
    pub name: String,
    /// Labels in insertion order (which is also display order)
    pub labels: Vec<Label>,
}

impl MapData {
    /// Creates an unlabeled map from a registry seed.
    pub fn from_seed(seed: &MapSeed) -> Self {
        Self {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            labels: Vec::new(),
        }
    }
}

/// A staged, unconfirmed label location awaiting text input.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingClick {
    /// Map the click was made on
    pub map_id: MapId,
    /// Horizontal position in percent
    pub x: f32,
    /// Vertical position in percent
    pub y: f32,
}

/// All maps of the session, in registry order.
#[derive(Debug, Clone)]
pub struct Atlas {
    /// Maps in the order they were seeded
    pub maps: Vec<MapData>,
}

impl Default for Atlas {
    /// Seeds the atlas from the static map registry, every map unlabeled.
    fn default() -> Self {
        Self::from_seeds(artwork::MAP_REGISTRY)
    }
}

impl Atlas {
    /// Builds an atlas from an arbitrary seed list.
    pub fn from_seeds(seeds: &[MapSeed]) -> Self {
        Self {
            maps: seeds.iter().map(MapData::from_seed).collect(),
        }
    }

    /// Looks up a map by its ID.
    pub fn get(&self, map_id: &str) -> Option<&MapData> {
        self.maps.iter().find(|m| m.id == map_id)
    }

    fn get_mut(&mut self, map_id: &str) -> Option<&mut MapData> {
        self.maps.iter_mut().find(|m| m.id == map_id)
    }

    /// Returns the labels of a map, or an empty slice for an unknown ID.
    pub fn labels(&self, map_id: &str) -> &[Label] {
        self.get(map_id).map(|m| m.labels.as_slice()).unwrap_or(&[])
    }

    /// Appends a label to the end of a map's sequence.
    ///
    /// # Returns
    ///
    /// The new label's ID, or `None` if the map does not exist.
    pub fn add_label(&mut self, map_id: &str, label: Label) -> Option<LabelId> {
        let map = self.get_mut(map_id)?;
        let id = label.id;
        map.labels.push(label);
        Some(id)
    }

    /// Removes exactly one label from a map.
    ///
    /// Stale label IDs and unknown maps are ignored.
    ///
    /// # Returns
    ///
    /// `true` if a label was removed.
    pub fn remove_label(&mut self, map_id: &str, label_id: LabelId) -> bool {
        let Some(map) = self.get_mut(map_id) else {
            return false;
        };
        let before = map.labels.len();
        map.labels.retain(|l| l.id != label_id);
        map.labels.len() != before
    }
}

/// Explicit state container for one application session.
///
/// Every mutation goes through a method here; the UI only translates events
/// into these calls.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Active view
    pub section: Section,
    /// Explicitly selected map, if any
    pub selected_map: Option<MapId>,
    /// All maps and their labels
    pub atlas: Atlas,
    /// Staged click awaiting confirmation
    pub pending: Option<PendingClick>,
    /// Text typed for the pending click
    pub label_text: String,
}

impl Session {
    /// Creates a fresh session with every map unlabeled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the active view. Map, label and pending state are untouched.
    pub fn select_section(&mut self, section: Section) {
        if self.section != section {
            log::debug!("Switching section {:?} -> {:?}", self.section, section);
            self.section = section;
        }
    }

    /// Selects a map by ID.
    ///
    /// A pending click staged on a different map is abandoned so it can never
    /// be confirmed against the wrong map. Unknown IDs are ignored.
    pub fn select_map(&mut self, map_id: &str) {
        if self.atlas.get(map_id).is_none() {
            log::warn!("Ignoring selection of unknown map '{}'", map_id);
            return;
        }
        if self.pending.as_ref().is_some_and(|p| p.map_id != map_id) {
            log::debug!("Abandoning pending click on map switch");
            self.cancel_pending();
        }
        if self.selected_map.as_deref() != Some(map_id) {
            log::debug!("Selected map '{}'", map_id);
            self.selected_map = Some(map_id.to_string());
        }
    }

    /// The map to highlight: the selected one, else the first registry entry.
    pub fn displayed_map_id(&self) -> Option<&str> {
        self.selected_map
            .as_deref()
            .or_else(|| self.atlas.maps.first().map(|m| m.id.as_str()))
    }

    /// The explicitly selected map, if any.
    pub fn selected_map(&self) -> Option<&MapData> {
        self.selected_map.as_deref().and_then(|id| self.atlas.get(id))
    }

    /// Stages a pending click at a normalized position on the selected map.
    ///
    /// Does nothing when no map is selected. A new click replaces any
    /// previous pending click but keeps the typed text.
    pub fn stage_click(&mut self, x: f32, y: f32) {
        let Some(map_id) = self.selected_map.clone() else {
            return;
        };
        let pending = PendingClick {
            map_id,
            x: clamp_percent(x),
            y: clamp_percent(y),
        };
        log::debug!(
            "Staged click on '{}' at ({:.1}%, {:.1}%)",
            pending.map_id,
            pending.x,
            pending.y
        );
        self.pending = Some(pending);
    }

    /// Whether the typed text is acceptable for confirmation.
    pub fn can_confirm(&self) -> bool {
        self.pending.is_some() && !self.label_text.trim().is_empty()
    }

    /// Promotes the pending click to a label on the map it was staged on.
    ///
    /// Requires a pending click and non-empty trimmed text; otherwise nothing
    /// changes.
    ///
    /// # Returns
    ///
    /// The ID of the new label, or `None` if nothing was added.
    pub fn confirm_pending(&mut self) -> Option<LabelId> {
        if !self.can_confirm() {
            log::trace!("Ignoring confirmation without a pending click or text");
            return None;
        }
        let pending = self.pending.take()?;
        let text = std::mem::take(&mut self.label_text).trim().to_string();
        let label = Label::new(text, pending.x, pending.y);
        let id = self.atlas.add_label(&pending.map_id, label);
        if let Some(id) = id {
            log::debug!("Added label {} to map '{}'", id, pending.map_id);
        }
        id
    }

    /// Discards the pending click and typed text.
    pub fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            log::debug!("Pending click cancelled");
        }
        self.label_text.clear();
    }

    /// Removes a label; a stale ID is a silent no-op.
    ///
    /// # Returns
    ///
    /// `true` if the label existed and was removed.
    pub fn remove_label(&mut self, map_id: &str, label_id: LabelId) -> bool {
        let removed = self.atlas.remove_label(map_id, label_id);
        if removed {
            log::debug!("Removed label {} from map '{}'", label_id, map_id);
        }
        removed
    }
}

/// Clamps a coordinate into the normalized `[0, 100]` range. NaN maps to 0.
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, PERCENT_MAX)
    }
}

/// Converts a pointer position to normalized percentages of a surface.
///
/// `x = (px - left) / width * 100`, `y = (py - top) / height * 100`, clamped
/// to `[0, 100]`.
///
/// # Returns
///
/// `None` if the surface has no area.
pub fn normalize_click(pointer: (f32, f32), origin: (f32, f32), size: (f32, f32)) -> Option<(f32, f32)> {
    let (width, height) = size;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let x = (pointer.0 - origin.0) / width * PERCENT_MAX;
    let y = (pointer.1 - origin.1) / height * PERCENT_MAX;
    Some((clamp_percent(x), clamp_percent(y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(session: &Session, map_id: &str) -> Vec<String> {
        session
            .atlas
            .labels(map_id)
            .iter()
            .map(|l| l.text.clone())
            .collect()
    }

    fn add(session: &mut Session, text: &str, x: f32, y: f32) -> LabelId {
        session.stage_click(x, y);
        session.label_text = text.to_string();
        session.confirm_pending().expect("label should be added")
    }

    #[test]
    fn atlas_seeds_three_empty_maps() {
        let atlas = Atlas::default();
        let ids: Vec<&str> = atlas.maps.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["world", "europe", "russia"]);
        assert!(atlas.maps.iter().all(|m| m.labels.is_empty()));
    }

    #[test]
    fn paris_lands_only_on_europe() {
        let mut session = Session::new();
        session.select_map("europe");
        session.stage_click(40.0, 50.0);
        session.label_text = "Paris".into();
        session.confirm_pending();

        let europe = session.atlas.labels("europe");
        assert_eq!(europe.len(), 1);
        assert_eq!(europe[0].text, "Paris");
        assert_eq!((europe[0].x, europe[0].y), (40.0, 50.0));
        assert!(session.atlas.labels("world").is_empty());
        assert!(session.atlas.labels("russia").is_empty());
        assert!(session.pending.is_none());
        assert!(session.label_text.is_empty());
    }

    #[test]
    fn removing_first_of_two_keeps_second() {
        let mut session = Session::new();
        session.select_map("world");
        let a = add(&mut session, "A", 10.0, 10.0);
        add(&mut session, "B", 20.0, 20.0);

        assert!(session.remove_label("world", a));
        assert_eq!(texts(&session, "world"), vec!["B"]);
    }

    #[test]
    fn interleaved_adds_and_removes_preserve_insertion_order() {
        let mut session = Session::new();
        session.select_map("russia");
        let ids: Vec<LabelId> = ["a", "b", "c", "d", "e"]
            .iter()
            .enumerate()
            .map(|(i, t)| add(&mut session, t, i as f32 * 10.0, 50.0))
            .collect();

        session.remove_label("russia", ids[1]);
        session.remove_label("russia", ids[3]);
        add(&mut session, "f", 90.0, 90.0);

        assert_eq!(texts(&session, "russia"), vec!["a", "c", "e", "f"]);
    }

    #[test]
    fn double_removal_is_a_no_op() {
        let mut session = Session::new();
        session.select_map("world");
        let id = add(&mut session, "Nile", 55.0, 60.0);

        assert!(session.remove_label("world", id));
        assert!(!session.remove_label("world", id));
        assert!(session.atlas.labels("world").is_empty());
    }

    #[test]
    fn removal_on_wrong_or_unknown_map_changes_nothing() {
        let mut session = Session::new();
        session.select_map("world");
        let id = add(&mut session, "Andes", 25.0, 70.0);

        assert!(!session.remove_label("europe", id));
        assert!(!session.remove_label("atlantis", id));
        assert_eq!(texts(&session, "world"), vec!["Andes"]);
    }

    #[test]
    fn empty_or_blank_text_never_adds() {
        let mut session = Session::new();
        session.select_map("europe");
        session.stage_click(30.0, 30.0);

        for text in ["", "   ", "\t\n"] {
            session.label_text = text.into();
            assert!(session.confirm_pending().is_none());
            assert!(session.atlas.labels("europe").is_empty());
        }
        assert!(session.pending.is_some());
    }

    #[test]
    fn confirmed_text_is_trimmed() {
        let mut session = Session::new();
        session.select_map("europe");
        add(&mut session, "  Rome ", 45.0, 60.0);
        assert_eq!(texts(&session, "europe"), vec!["Rome"]);
    }

    #[test]
    fn confirm_without_pending_click_is_a_no_op() {
        let mut session = Session::new();
        session.select_map("world");
        session.label_text = "Orphan".into();
        assert!(session.confirm_pending().is_none());
        assert!(session.atlas.labels("world").is_empty());
        assert_eq!(session.label_text, "Orphan");
    }

    #[test]
    fn click_without_selected_map_is_ignored() {
        let mut session = Session::new();
        session.stage_click(50.0, 50.0);
        assert!(session.pending.is_none());
    }

    #[test]
    fn cancel_discards_pending_and_text() {
        let mut session = Session::new();
        session.select_map("world");
        session.stage_click(12.0, 34.0);
        session.label_text = "Draft".into();

        session.cancel_pending();

        assert!(session.pending.is_none());
        assert!(session.label_text.is_empty());
        assert!(session.atlas.labels("world").is_empty());
    }

    #[test]
    fn switching_maps_clears_foreign_pending_click() {
        let mut session = Session::new();
        session.select_map("world");
        session.stage_click(12.0, 34.0);
        session.label_text = "Draft".into();

        session.select_map("world");
        assert!(session.pending.is_some());

        session.select_map("europe");
        assert!(session.pending.is_none());
        assert!(session.label_text.is_empty());
        assert!(session.confirm_pending().is_none());
        assert!(session.atlas.labels("europe").is_empty());
    }

    #[test]
    fn labels_stay_on_their_own_map_across_switches() {
        let mut session = Session::new();
        session.select_map("world");
        add(&mut session, "Pacific", 5.0, 50.0);
        session.select_map("europe");
        add(&mut session, "Alps", 50.0, 50.0);
        session.select_map("world");

        assert_eq!(texts(&session, "world"), vec!["Pacific"]);
        assert_eq!(texts(&session, "europe"), vec!["Alps"]);
        assert!(session.atlas.labels("russia").is_empty());
    }

    #[test]
    fn section_switch_keeps_labels_and_pending() {
        let mut session = Session::new();
        session.select_section(Section::Maps);
        session.select_map("russia");
        add(&mut session, "Volga", 30.0, 55.0);
        session.stage_click(60.0, 40.0);

        session.select_section(Section::About);
        session.select_section(Section::Maps);

        assert_eq!(texts(&session, "russia"), vec!["Volga"]);
        assert!(session.pending.is_some());
        assert_eq!(session.selected_map.as_deref(), Some("russia"));
    }

    #[test]
    fn unknown_map_selection_is_ignored() {
        let mut session = Session::new();
        session.select_map("europe");
        session.select_map("mars");
        assert_eq!(session.selected_map.as_deref(), Some("europe"));
    }

    #[test]
    fn displayed_map_defaults_to_first_entry() {
        let mut session = Session::new();
        assert_eq!(session.displayed_map_id(), Some("world"));
        assert!(session.selected_map().is_none());
        session.select_map("russia");
        assert_eq!(session.displayed_map_id(), Some("russia"));
    }

    #[test]
    fn label_ids_are_unique_within_a_map() {
        let mut session = Session::new();
        session.select_map("world");
        let ids: Vec<LabelId> = (0..50)
            .map(|i| add(&mut session, "x", i as f32, i as f32))
            .collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn normalize_click_maps_surface_to_percent() {
        let origin = (100.0, 50.0);
        let size = (800.0, 500.0);
        assert_eq!(normalize_click((100.0, 50.0), origin, size), Some((0.0, 0.0)));
        assert_eq!(normalize_click((900.0, 550.0), origin, size), Some((100.0, 100.0)));
        assert_eq!(normalize_click((420.0, 300.0), origin, size), Some((40.0, 50.0)));
    }

    #[test]
    fn normalize_click_stays_within_bounds() {
        let origin = (10.0, 20.0);
        let size = (333.0, 187.0);
        for px in [-5.0, 10.0, 100.5, 343.0, 400.0] {
            for py in [-1.0, 20.0, 99.9, 207.0, 500.0] {
                let (x, y) = normalize_click((px, py), origin, size).unwrap();
                assert!((0.0..=100.0).contains(&x), "x out of range: {x}");
                assert!((0.0..=100.0).contains(&y), "y out of range: {y}");
            }
        }
    }

    #[test]
    fn normalize_click_rejects_empty_surface() {
        assert_eq!(normalize_click((1.0, 1.0), (0.0, 0.0), (0.0, 10.0)), None);
        assert_eq!(normalize_click((1.0, 1.0), (0.0, 0.0), (10.0, 0.0)), None);
    }

    #[test]
    fn label_new_clamps_coordinates() {
        let label = Label::new("Edge".into(), -3.0, 140.0);
        assert_eq!((label.x, label.y), (0.0, 100.0));
        assert_eq!(clamp_percent(f32::NAN), 0.0);
    }
}
