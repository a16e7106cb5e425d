//! In-memory room registry — the single mutable source of truth.
//!
//! Owns the ordered room collection and the append-only system log. The
//! executor is the only pipeline stage that mutates it; encoder and decoder
//! operate purely on strings and value types.

use rand::Rng;

use labvoice_domain::device::DeviceKind;
use labvoice_domain::error::{ExecuteError, ValidationError};
use labvoice_domain::log::{LogEntry, LogKind};
use labvoice_domain::room::{Room, RoomId};

/// Default lab room names.
pub const DEFAULT_ROOMS: [&str; 20] = [
    "01-04", "05-08", "09-10", "11-12", "13-14", "15-16", "17-18", "19-20", "21-22", "23-24",
    "25-26", "27-28", "29-30", "31-32", "33-34", "35-36", "A415", "B426", "B411", "A416",
];

/// Ordered rooms plus the append-only log.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    rooms: Vec<Room>,
    logs: Vec<LogEntry>,
}

impl Registry {
    /// Registry with the twenty default rooms, every circuit off.
    #[must_use]
    pub fn with_default_rooms() -> Self {
        // The default names are statically non-empty, so none is dropped.
        Self {
            rooms: DEFAULT_ROOMS
                .iter()
                .filter_map(|name| Room::new(*name).ok())
                .collect(),
            logs: Vec::new(),
        }
    }

    /// Registry from an ordered name list, every circuit off.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when any name is empty, or
    /// [`ValidationError::DuplicateId`] when two names derive the same id.
    pub fn from_names<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rooms = names
            .into_iter()
            .map(Room::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::ensure_unique_ids(&rooms)?;
        Ok(Self {
            rooms,
            logs: Vec::new(),
        })
    }

    /// Room ids address rooms throughout the registry, so two rooms must
    /// never share one.
    fn ensure_unique_ids(rooms: &[Room]) -> Result<(), ValidationError> {
        let mut seen = std::collections::HashSet::new();
        for room in rooms {
            if !seen.insert(&room.id) {
                return Err(ValidationError::DuplicateId(room.id.to_string()));
            }
        }
        Ok(())
    }

    /// Give every circuit a coin-flip initial state. Demo seeding only; the
    /// flips are not logged.
    pub fn randomize_states<R: Rng>(&mut self, rng: &mut R) {
        for room in &mut self.rooms {
            for kind in DeviceKind::ALL {
                room.devices.get_mut(kind).powered = rng.gen_bool(0.5);
            }
        }
    }

    /// All rooms, in registration order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Look up a room by its derived identifier.
    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| &room.id == id)
    }

    /// Rooms whose name contains `token`, ignoring case, in registry order.
    #[must_use]
    pub fn find_rooms(&self, token: &str) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|room| room.name_contains(token))
            .collect()
    }

    /// Set one circuit to `on`, logging when the state actually changes.
    ///
    /// Returns `Some(true)` when the circuit changed, `Some(false)` when it
    /// was already in the requested state, `None` for an unknown room id.
    pub fn set_powered(&mut self, id: &RoomId, kind: DeviceKind, on: bool) -> Option<bool> {
        let room = self.rooms.iter_mut().find(|room| &room.id == id)?;
        let state = room.devices.get_mut(kind);
        if state.powered == on {
            return Some(false);
        }
        state.powered = on;
        let message = format!(
            "{} 实验室的{}已{}",
            room.name,
            kind.label(),
            if on { "通电" } else { "断电" }
        );
        self.add_log(message, LogKind::Info);
        Some(true)
    }

    /// Flip one circuit, logging the change. Returns the new state, or
    /// `None` for an unknown room id.
    pub fn toggle(&mut self, id: &RoomId, kind: DeviceKind) -> Option<bool> {
        let current = self.room(id)?.devices.get(kind).powered;
        self.set_powered(id, kind, !current)?;
        Some(!current)
    }

    /// Replace the room list with `names`.
    ///
    /// Rooms whose name survives keep their circuit states and their current
    /// relative order; new names are appended with every circuit off; rooms
    /// no longer listed are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when any new name is empty, or
    /// [`ValidationError::DuplicateId`] when two names derive the same id;
    /// the registry is left unchanged in either case.
    pub fn update_room_names(&mut self, names: &[String]) -> Result<(), ValidationError> {
        let mut rooms: Vec<Room> = self
            .rooms
            .iter()
            .filter(|room| names.contains(&room.name))
            .cloned()
            .collect();
        for name in names {
            if rooms.iter().any(|room| &room.name == name) {
                continue;
            }
            rooms.push(Room::new(name.clone())?);
        }
        Self::ensure_unique_ids(&rooms)?;
        self.rooms = rooms;
        Ok(())
    }

    /// Append one log entry.
    pub fn add_log(&mut self, message: impl Into<String>, kind: LogKind) {
        self.logs.push(LogEntry::new(message, kind));
    }

    /// Log entries, newest first.
    pub fn logs(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs.iter().rev()
    }

    /// The grouped per-room status report of the control surface.
    ///
    /// An empty or blank `filter` reports every room; otherwise rooms are
    /// selected by case-insensitive name substring.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError::NoMatchingRoom`] when the filter matches no
    /// room.
    pub fn status_report(&self, filter: &str) -> Result<String, ExecuteError> {
        let filter = filter.trim();
        let targets: Vec<&Room> = if filter.is_empty() {
            self.rooms.iter().collect()
        } else {
            self.find_rooms(filter)
        };
        if targets.is_empty() {
            return Err(ExecuteError::NoMatchingRoom(filter.to_string()));
        }

        let mut lines = Vec::new();
        for room in targets {
            lines.push(format!("实验室: {}", room.name));
            for kind in DeviceKind::ALL {
                lines.push(format!(
                    "  {}: {}",
                    kind.label(),
                    if room.devices.get(kind).powered { "通电" } else { "断电" }
                ));
            }
            lines.push(String::new());
        }
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_registry() -> Registry {
        Registry::from_names(["05-08", "A415"]).unwrap()
    }

    #[test]
    fn should_build_default_registry_with_twenty_rooms() {
        let registry = Registry::with_default_rooms();
        assert_eq!(registry.rooms().len(), 20);
        assert!(registry.rooms().iter().all(|room| {
            DeviceKind::ALL
                .iter()
                .all(|kind| !room.devices.get(*kind).powered)
        }));
    }

    #[test]
    fn should_reject_empty_room_name_in_list() {
        let result = Registry::from_names(["05-08", ""]);
        assert!(matches!(result, Err(ValidationError::EmptyName)));
    }

    #[test]
    fn should_reject_names_sharing_a_room_id() {
        // "A415" and "a415" both derive the id "a415"; letting both in
        // would leave the second room unaddressable by id.
        let result = Registry::from_names(["A415", "a415"]);
        assert_eq!(
            result.unwrap_err(),
            ValidationError::DuplicateId("a415".to_string())
        );
    }

    #[test]
    fn should_keep_registry_unchanged_when_update_collides_ids() {
        let mut registry = small_registry();
        let id = RoomId::from_name("05-08");
        registry.set_powered(&id, DeviceKind::Lighting, true);

        let names = vec!["05-08".to_string(), "A415".to_string(), "a415".to_string()];
        assert_eq!(
            registry.update_room_names(&names).unwrap_err(),
            ValidationError::DuplicateId("a415".to_string())
        );

        let room_names: Vec<&str> = registry.rooms().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(room_names, vec!["05-08", "A415"]);
        assert!(registry.room(&id).unwrap().devices.lighting.powered);
    }

    #[test]
    fn should_log_once_per_actual_change() {
        let mut registry = small_registry();
        let id = RoomId::from_name("05-08");

        assert_eq!(registry.set_powered(&id, DeviceKind::Lighting, true), Some(true));
        assert_eq!(registry.set_powered(&id, DeviceKind::Lighting, true), Some(false));

        let messages: Vec<&str> = registry.logs().map(|entry| entry.message.as_str()).collect();
        assert_eq!(messages, vec!["05-08 实验室的照明已通电"]);
    }

    #[test]
    fn should_return_none_for_unknown_room() {
        let mut registry = small_registry();
        let id = RoomId::from_name("99-99");
        assert_eq!(registry.set_powered(&id, DeviceKind::Power, true), None);
        assert_eq!(registry.toggle(&id, DeviceKind::Power), None);
    }

    #[test]
    fn should_toggle_back_and_forth() {
        let mut registry = small_registry();
        let id = RoomId::from_name("a415");
        assert_eq!(registry.toggle(&id, DeviceKind::Ac), Some(true));
        assert_eq!(registry.toggle(&id, DeviceKind::Ac), Some(false));
        assert_eq!(registry.logs().count(), 2);
    }

    #[test]
    fn should_list_logs_newest_first() {
        let mut registry = small_registry();
        registry.add_log("first", LogKind::Info);
        registry.add_log("second", LogKind::Error);

        let messages: Vec<&str> = registry.logs().map(|entry| entry.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);
    }

    #[test]
    fn should_find_rooms_by_loose_substring() {
        let registry = Registry::with_default_rooms();
        // Token "1" matches every name containing a "1".
        let matched = registry.find_rooms("1");
        assert!(matched.len() > 1);
        assert!(matched.iter().all(|room| room.name.contains('1')));

        let matched = registry.find_rooms("a4");
        let names: Vec<&str> = matched.iter().map(|room| room.name.as_str()).collect();
        assert_eq!(names, vec!["A415", "A416"]);
    }

    #[test]
    fn should_keep_surviving_state_on_room_name_update() {
        let mut registry = small_registry();
        let id = RoomId::from_name("05-08");
        registry.set_powered(&id, DeviceKind::Lighting, true);

        let names = vec!["05-08".to_string(), "B426".to_string()];
        registry.update_room_names(&names).unwrap();

        let room_names: Vec<&str> = registry.rooms().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(room_names, vec!["05-08", "B426"]);
        assert!(registry.room(&id).unwrap().devices.lighting.powered);
        assert!(!registry.room(&RoomId::from_name("B426")).unwrap().devices.power.powered);
    }

    #[test]
    fn should_render_status_report_for_one_room() {
        let mut registry = small_registry();
        let id = RoomId::from_name("05-08");
        registry.set_powered(&id, DeviceKind::Power, true);

        let report = registry.status_report("05-08").unwrap();
        assert_eq!(
            report,
            "实验室: 05-08\n  动力: 通电\n  照明: 断电\n  空调: 断电\n"
        );
    }

    #[test]
    fn should_report_every_room_for_blank_filter() {
        let registry = small_registry();
        let report = registry.status_report("  ").unwrap();
        assert_eq!(report.matches("实验室: ").count(), 2);
    }

    #[test]
    fn should_fail_status_report_for_unmatched_filter() {
        let registry = small_registry();
        assert_eq!(
            registry.status_report("99").unwrap_err(),
            ExecuteError::NoMatchingRoom("99".to_string())
        );
    }

    #[test]
    fn should_randomize_states_without_logging() {
        let mut registry = Registry::with_default_rooms();
        let mut rng = StdRng::seed_from_u64(7);
        registry.randomize_states(&mut rng);
        assert_eq!(registry.logs().count(), 0);
    }
}
