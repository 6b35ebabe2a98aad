//! The authoritative world and its tick loop entry point.

use std::fs;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wl_core::action::Action;
use wl_core::chat::{ChatState, Message};
use wl_core::entity::{EDITOR_ID, Entity, Facing};
use wl_core::geom::{Coords, Location, MapId};
use wl_core::state::GameState;
use wl_core::tile::Tile;

use crate::chat::ChatManager;
use crate::clock::WorldClock;
use crate::config::WorldConfig;
use crate::error::{WorldError, WorldResult};
use crate::inbox::ActionInboxes;
use crate::light::LIGHT_LEVEL;
use crate::map::{Manifest, MapData, MapSet};
use crate::movement;
use crate::persist::{self, WorldFile};
use crate::quadrant::RawMap;
use crate::registry::EntityRegistry;
use crate::snapshot::StateCell;

/// One registered viewer: the entity it follows and its snapshot cell.
#[derive(Debug, Clone)]
struct Viewer {
    entity_id: i32,
    cell: StateCell,
}

/// The authoritative world: maps, entities, clock, chat, and the viewers
/// receiving snapshots.
///
/// All mutation happens through [`World::apply_tick`] on whichever
/// thread owns the world. Other threads interact only through the action
/// inboxes and the snapshot cells, both cheap shared handles.
#[derive(Debug)]
pub struct World {
    config: WorldConfig,
    maps: MapSet,
    registry: EntityRegistry,
    clock: WorldClock,
    chat: ChatManager,
    inboxes: ActionInboxes,
    viewers: Vec<Viewer>,
    rng: StdRng,
}

impl World {
    /// Load a world from the directory named in `config`.
    ///
    /// A missing or unparsable maps manifest fails the load. Everything
    /// else cold-starts: an unreadable map file becomes an empty map, a
    /// missing world file means tick zero, a missing entity file means no
    /// entities, and each such case is logged rather than fatal.
    pub fn load(config: WorldConfig) -> WorldResult<Self> {
        let maps_dir = config.data_dir.join("maps");
        let manifest_path = maps_dir.join("maps.json");
        if !manifest_path.exists() {
            return Err(WorldError::MissingManifest(manifest_path));
        }
        let manifest: Manifest = serde_json::from_str(&fs::read_to_string(&manifest_path)?)?;

        let mut maps = MapSet::new();
        for record in manifest.maps {
            let raw: RawMap = match persist::read_json(&maps_dir.join(&record.file)) {
                Some(raw) => raw,
                None => {
                    tracing::warn!(map = %record.file, "map file missing or unreadable, loading empty");
                    RawMap::default()
                }
            };
            maps.insert(MapData::from_raw(record, raw));
        }

        let clock = match persist::read_json::<WorldFile>(&config.data_dir.join("world.json")) {
            Some(world_file) => WorldClock::at(world_file.tick),
            None => WorldClock::new(),
        };

        let mut registry = EntityRegistry::new();
        for entity in persist::read_entities(&config.data_dir.join("entities.json")) {
            if maps.contains(&entity.location().map) {
                registry.place(entity);
            } else {
                tracing::warn!(entity = %entity, map = %entity.location().map, "entity references an unknown map, skipping");
            }
        }

        let chat = ChatManager::new(config.data_dir.join("conversations"));
        let rng = StdRng::seed_from_u64(config.seed);

        tracing::info!(
            maps = maps.len(),
            entities = registry.len(),
            tick = clock.tick(),
            "world loaded"
        );

        Ok(Self {
            config,
            maps,
            registry,
            clock,
            chat,
            inboxes: ActionInboxes::new(),
            viewers: Vec::new(),
            rng,
        })
    }

    /// Connect a viewer for `player_id`, spawning a player entity at a
    /// free spawn point when none exists yet. Returns the snapshot cell
    /// the tick loop will publish into.
    pub fn connect(&mut self, player_id: i32) -> WorldResult<StateCell> {
        if self.registry.find_player(player_id).is_none() {
            let entity = self.spawn_player(player_id)?;
            tracing::info!(entity = %entity, "spawned new player");
            self.registry.place(entity);
        }
        Ok(self.register_viewer(player_id))
    }

    /// Connect the reserved editing player, spawning it if needed.
    pub fn connect_editor(&mut self) -> WorldResult<StateCell> {
        self.connect(EDITOR_ID)
    }

    /// Register a viewer for an existing entity without spawning
    /// anything. Used to feed snapshots to wanderer brains.
    pub fn connect_npc(&mut self, id: i32) -> StateCell {
        self.register_viewer(id)
    }

    /// Remove all viewers for `id` and drop its queued actions. The
    /// entity itself stays in the world.
    pub fn disconnect(&mut self, id: i32) {
        self.viewers.retain(|v| v.entity_id != id);
        self.inboxes.clear(id);
        tracing::info!(id, "viewer disconnected");
    }

    /// Whether any viewer is registered for `id`.
    pub fn is_online(&self, id: i32) -> bool {
        self.viewers.iter().any(|v| v.entity_id == id)
    }

    /// Queue an action for an entity. Usable from the owning thread;
    /// other threads enqueue through a cloned [`World::inboxes`] handle.
    pub fn enqueue_action(&self, id: i32, action: Action) {
        self.inboxes.push(id, action);
    }

    /// A shared handle to the action inboxes.
    pub fn inboxes(&self) -> ActionInboxes {
        self.inboxes.clone()
    }

    /// Run one tick: drain and apply every viewer's actions in
    /// registration order, publish fresh snapshots, then advance the
    /// clock.
    pub fn apply_tick(&mut self) {
        let viewers: Vec<(i32, StateCell)> = self
            .viewers
            .iter()
            .map(|v| (v.entity_id, v.cell.clone()))
            .collect();

        for (entity_id, cell) in viewers {
            for action in self.inboxes.drain(entity_id) {
                self.apply_action(entity_id, action);
            }
            if let Some(entity) = self.registry.find(entity_id) {
                cell.publish(self.compose_state(&entity));
            }
        }

        self.clock.advance();
    }

    /// Persist the entity list and world metadata.
    pub fn save(&self) -> WorldResult<()> {
        persist::write_entities(
            &self.config.data_dir.join("entities.json"),
            &self.registry.all(),
        )?;
        persist::write_json(
            &self.config.data_dir.join("world.json"),
            &WorldFile {
                tick: self.clock.tick(),
                saved_at: Utc::now(),
            },
        )?;
        tracing::info!(tick = self.clock.tick(), "world saved");
        Ok(())
    }

    /// The loaded maps.
    pub fn maps(&self) -> &MapSet {
        &self.maps
    }

    /// Every entity currently in the world.
    pub fn entities(&self) -> Vec<Entity> {
        self.registry.all()
    }

    /// The simulation clock.
    pub fn clock(&self) -> &WorldClock {
        &self.clock
    }

    /// The configuration the world was loaded with.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Ids of every wanderer, for wiring up decision loops.
    pub fn wanderer_ids(&self) -> Vec<i32> {
        self.registry
            .iter()
            .filter(|e| matches!(e, Entity::Wanderer { .. }))
            .map(|e| e.id())
            .collect()
    }

    /// Resolve a map by id or display name, for tooling.
    pub fn find_map(&self, name_or_id: &str) -> WorldResult<&MapData> {
        self.maps
            .iter()
            .find(|(id, data)| id.as_str() == name_or_id || data.record().name == name_or_id)
            .map(|(_, data)| data)
            .ok_or_else(|| WorldError::UnknownMap(name_or_id.to_string()))
    }

    /// The tile window covering the inclusive cell rectangle, or `None`
    /// when the map is unknown.
    pub fn tile_window(
        &self,
        map: &str,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Option<Vec<Vec<Tile>>> {
        let data = self.maps.get(map)?;
        let mut rows = Vec::new();
        for y in from.1..=to.1 {
            let mut row = Vec::new();
            for x in from.0..=to.0 {
                row.push(data.tile((x, y)));
            }
            rows.push(row);
        }
        Some(rows)
    }

    fn register_viewer(&mut self, entity_id: i32) -> StateCell {
        let cell = StateCell::new(GameState::initial(entity_id));
        self.viewers.push(Viewer {
            entity_id,
            cell: cell.clone(),
        });
        cell
    }

    fn spawn_player(&mut self, id: i32) -> WorldResult<Entity> {
        let mut free: Vec<Location> = Vec::new();
        for (map_id, data) in self.maps.iter() {
            for &(x, y) in data.spawns() {
                let location = Location::new(Coords::new(x as f32, y as f32), map_id.clone());
                if self.registry.entities_at(&location).is_empty() {
                    free.push(location);
                }
            }
        }
        if free.is_empty() {
            return Err(WorldError::SpawnExhausted);
        }
        let location = free.swap_remove(self.rng.random_range(0..free.len()));
        Ok(Entity::player(id, location))
    }

    fn compose_state(&self, entity: &Entity) -> GameState {
        let (rx, ry) = (self.config.view_radius_x, self.config.view_radius_y);
        // The window anchors to the truncated position, not the floored cell.
        let origin = (
            entity.location().coords.x as i32 - rx,
            entity.location().coords.y as i32 - ry,
        );
        let to = (origin.0 + 2 * rx, origin.1 + 2 * ry);
        let map = &entity.location().map;

        GameState {
            entity_id: entity.id(),
            location: Location::new(Coords::new(origin.0 as f32, origin.1 as f32), map.clone()),
            tiles: self.tile_window(map, origin, to).unwrap_or_else(|| {
                tracing::warn!(map = %map, "map missing while composing a snapshot");
                Vec::new()
            }),
            entities: self.registry.entities_in_rect(origin, to, map),
            tick: self.clock.tick(),
            light_level: self
                .maps
                .get(map)
                .map(|data| data.record().light_mode.level(self.clock.percent_of_day()))
                .unwrap_or(LIGHT_LEVEL),
            time: self.clock.time_string(),
        }
    }

    fn apply_action(&mut self, actor: i32, action: Action) {
        match action {
            Action::MoveEntity { dx, dy } => self.handle_move(actor, dx, dy),
            Action::RotateEntity { id, location, facing } => {
                self.registry.rotate_at(id, &location, facing);
            }
            Action::Interact => self.handle_interact(actor),
            Action::CloseConversation => self.handle_close_conversation(actor),
            Action::SendMessage { message } => self.handle_send_message(actor, message),
            Action::EditTile { x, y, tile } => self.handle_edit_tile(actor, x, y, tile),
            Action::GoToMap { map } => self.handle_go_to_map(actor, map),
        }
    }

    fn handle_move(&mut self, actor: i32, dx: f32, dy: f32) {
        let Some(mut entity) = self.registry.pop(actor) else {
            return;
        };
        if !entity.is_walker() {
            self.registry.place(entity);
            return;
        }

        let facing = Facing::from_step(dx, dy);
        let speed = entity.speed();
        let to = Location::new(
            entity.location().coords.offset(dx * speed, dy * speed),
            entity.location().map.clone(),
        );

        if entity.is_editing() {
            // The editor flies over everything, collision included.
            *entity.location_mut() = to;
        } else {
            movement::try_move(&self.maps, &self.registry, &mut entity, to);
        }
        // Facing updates even when the step was blocked, so an entity
        // can turn in place against a wall.
        if let Some(facing) = facing {
            *entity.facing_mut() = facing;
        }
        self.registry.place(entity);
    }

    fn handle_interact(&mut self, actor: i32) {
        let Some(player) = self.registry.find_player(actor) else {
            return;
        };
        if player.is_editing() {
            return;
        }

        match movement::facing_entity(&self.registry, &player) {
            Some(target) if target.is_chatter() => {
                if target.chat_state().is_some_and(|s| !s.is_talking()) {
                    let conversation = self.chat.conversation(actor, target.id());
                    self.set_chat_state(target.id(), ChatState::Talking(conversation.clone()));
                    self.set_chat_state(actor, ChatState::Talking(conversation));
                }
            }
            Some(target) => {
                if let Some(destination) = target.destination().cloned() {
                    self.traverse_door(actor, destination);
                }
            }
            None => {
                if let Some((cell, tile)) = movement::facing_tile(&self.maps, &player) {
                    tracing::debug!(?cell, %tile, "nothing to interact with");
                }
            }
        }
    }

    fn handle_close_conversation(&mut self, actor: i32) {
        let Some(player) = self.registry.find_player(actor) else {
            return;
        };
        let Some(conversation) = player.chat_state().and_then(ChatState::conversation).cloned()
        else {
            return;
        };
        if let Some(other) = conversation.other_participant(actor) {
            self.set_chat_state(other, ChatState::Idle);
        }
        self.set_chat_state(actor, ChatState::Idle);
    }

    fn handle_send_message(&mut self, actor: i32, message: String) {
        let Some(player) = self.registry.find_player(actor) else {
            return;
        };
        if player.is_editing() {
            return;
        }
        let Some(mut conversation) = player.chat_state().and_then(ChatState::conversation).cloned()
        else {
            return;
        };

        conversation.add_message(Message {
            sender_id: actor,
            message,
            time: self.clock.short_time_string(),
        });
        if let Err(e) = self.chat.save(&conversation) {
            tracing::warn!(error = %e, "failed to persist a conversation");
        }
        if let Some(other) = conversation.other_participant(actor) {
            self.set_chat_state(other, ChatState::Talking(conversation.clone()));
        }
        self.set_chat_state(actor, ChatState::Talking(conversation));
    }

    fn handle_edit_tile(&mut self, actor: i32, x: i32, y: i32, tile: Tile) {
        let Some(player) = self.registry.find_player(actor) else {
            return;
        };
        if !player.is_editing() {
            return;
        }
        let map_id = player.location().map.clone();
        let Some(data) = self.maps.get_mut(&map_id) else {
            return;
        };
        data.edit_tile((x, y), tile);

        let path = self.config.data_dir.join("maps").join(&data.record().file);
        if let Err(e) = persist::write_json(&path, data.raw()) {
            tracing::warn!(map = %map_id, error = %e, "failed to persist an edited map");
        }
    }

    fn handle_go_to_map(&mut self, actor: i32, map: MapId) {
        if !self.maps.contains(&map) {
            tracing::warn!(map = %map, "go-to-map target does not exist");
            return;
        }
        let Some(mut entity) = self.registry.pop(actor) else {
            return;
        };
        entity.location_mut().map = map;
        self.registry.place(entity);
    }

    fn traverse_door(&mut self, actor: i32, destination: Location) {
        let Some(mut entity) = self.registry.pop(actor) else {
            return;
        };
        movement::try_move(&self.maps, &self.registry, &mut entity, destination);
        self.registry.place(entity);
    }

    fn set_chat_state(&mut self, id: i32, state: ChatState) {
        if let Some(entity) = self.registry.entity_mut(id)
            && let Some(chat_state) = entity.chat_state_mut()
        {
            *chat_state = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;

    const VILLAGE: &str = "village.json";
    const CELLAR: &str = "cellar.json";

    /// A 12x12 grass village with a spawner at (2, 2) and a wall at
    /// (6, 5), plus a 6x6 grass cellar.
    fn write_fixture(dir: &Path) {
        let maps_dir = dir.join("maps");
        fs::create_dir_all(&maps_dir).unwrap();
        fs::write(
            maps_dir.join("maps.json"),
            r#"{"maps":[
                {"name":"Village","file":"village.json","lightMode":"NATURAL","defaultTile":"Grass"},
                {"name":"Cellar","file":"cellar.json","lightMode":"DARK","defaultTile":"Grass"}
            ]}"#,
        )
        .unwrap();

        let mut se = vec![vec![Tile::Grass.id(); 12]; 12];
        se[2][2] = Tile::Spawner.id();
        se[5][6] = Tile::Wall.id();
        let village = RawMap {
            se,
            ..RawMap::default()
        };
        fs::write(maps_dir.join(VILLAGE), serde_json::to_string(&village).unwrap()).unwrap();

        let cellar = RawMap {
            se: vec![vec![Tile::Grass.id(); 6]; 6],
            ..RawMap::default()
        };
        fs::write(maps_dir.join(CELLAR), serde_json::to_string(&cellar).unwrap()).unwrap();
    }

    fn write_entities(dir: &Path, entities: &[Entity]) {
        persist::write_entities(&dir.join("entities.json"), entities).unwrap();
    }

    fn load(dir: &Path) -> World {
        World::load(WorldConfig::new(dir).with_seed(1)).unwrap()
    }

    fn village(x: f32, y: f32) -> Location {
        Location::new(Coords::new(x, y), VILLAGE)
    }

    fn facing_right_player(id: i32, x: f32, y: f32) -> Entity {
        let mut player = Entity::player(id, village(x, y));
        *player.facing_mut() = Facing::Right;
        player
    }

    #[test]
    fn load_requires_a_manifest() {
        let dir = TempDir::new().unwrap();
        let err = World::load(WorldConfig::new(dir.path())).unwrap_err();
        assert!(matches!(err, WorldError::MissingManifest(_)));
    }

    #[test]
    fn load_skips_entities_on_unknown_maps() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        write_entities(
            dir.path(),
            &[
                Entity::player(7, village(4.0, 4.0)),
                Entity::player(8, Location::new(Coords::new(1.0, 1.0), "gone.json")),
            ],
        );
        let world = load(dir.path());
        assert_eq!(world.entities().len(), 1);
    }

    #[test]
    fn connect_spawns_at_the_free_spawn_point() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        let mut world = load(dir.path());

        world.connect(7).unwrap();
        let entities = world.entities();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].location().coords, Coords::new(2.0, 2.0));
        assert!(world.is_online(7));
    }

    #[test]
    fn connect_reuses_an_existing_entity() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        write_entities(dir.path(), &[Entity::player(7, village(4.0, 4.0))]);
        let mut world = load(dir.path());

        world.connect(7).unwrap();
        let entities = world.entities();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].location().coords, Coords::new(4.0, 4.0));
    }

    #[test]
    fn connect_fails_when_spawns_are_exhausted() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        write_entities(dir.path(), &[Entity::player(7, village(2.0, 2.0))]);
        let mut world = load(dir.path());

        let err = world.connect(8).unwrap_err();
        assert!(matches!(err, WorldError::SpawnExhausted));
    }

    #[test]
    fn disconnect_keeps_the_entity_in_the_world() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        let mut world = load(dir.path());

        world.connect(7).unwrap();
        world.disconnect(7);
        assert!(!world.is_online(7));
        assert_eq!(world.entities().len(), 1);
    }

    #[test]
    fn move_actions_apply_and_publish() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        let mut world = load(dir.path());

        let cell = world.connect(7).unwrap();
        world.enqueue_action(7, Action::MoveEntity { dx: 1.0, dy: 0.0 });
        world.apply_tick();

        let state = cell.latest();
        assert_eq!(state.tick, 0);
        assert_eq!(world.clock().tick(), 1);
        let me = state.entities.iter().find(|e| e.id() == 7).unwrap();
        assert_eq!(me.location().coords, Coords::new(2.2, 2.0));
        assert_eq!(me.facing(), Facing::Right);
    }

    #[test]
    fn snapshots_center_on_the_entity() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        let mut world = load(dir.path());

        let cell = world.connect(7).unwrap();
        world.apply_tick();

        let state = cell.latest();
        // Spawn is (2, 2) and the radius is 8, so the window starts at -6.
        assert_eq!(state.location.coords, Coords::new(-6.0, -6.0));
        assert_eq!(state.tiles.len(), 17);
        assert_eq!(state.tiles[0].len(), 17);
        // Cells outside the stored grid read as the map default.
        assert_eq!(state.tiles[0][0], Tile::Grass);
        assert!(!state.time.is_empty());
    }

    #[test]
    fn blocked_moves_turn_the_entity_in_place() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        write_entities(dir.path(), &[Entity::player(7, village(5.0, 5.0))]);
        let mut world = load(dir.path());

        world.connect(7).unwrap();
        world.enqueue_action(7, Action::MoveEntity { dx: 1.0, dy: 0.0 });
        world.apply_tick();

        let me = world.entities().into_iter().find(|e| e.id() == 7).unwrap();
        assert_eq!(me.location().coords, Coords::new(5.0, 5.0));
        assert_eq!(me.facing(), Facing::Right);
    }

    #[test]
    fn walkers_never_overlap_after_a_tick() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        write_entities(
            dir.path(),
            &[
                Entity::player(7, village(4.0, 4.0)),
                Entity::player(8, village(5.0, 4.0)),
            ],
        );
        let mut world = load(dir.path());

        world.connect(7).unwrap();
        world.connect(8).unwrap();
        for _ in 0..10 {
            world.enqueue_action(7, Action::MoveEntity { dx: 1.0, dy: 0.0 });
            world.enqueue_action(8, Action::MoveEntity { dx: -1.0, dy: 0.0 });
            world.apply_tick();
        }

        let entities = world.entities();
        let a = entities.iter().find(|e| e.id() == 7).unwrap();
        let b = entities.iter().find(|e| e.id() == 8).unwrap();
        assert!(!a.body().intersects(&b.body()));
    }

    #[test]
    fn interacting_starts_a_shared_conversation() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        write_entities(
            dir.path(),
            &[
                facing_right_player(7, 5.0, 5.0),
                Entity::player(8, village(6.0, 5.0)),
            ],
        );
        let mut world = load(dir.path());
        world.connect(7).unwrap();
        world.connect(8).unwrap();

        world.enqueue_action(7, Action::Interact);
        world.apply_tick();

        for id in [7, 8] {
            let entity = world.entities().into_iter().find(|e| e.id() == id).unwrap();
            match entity.chat_state() {
                Some(ChatState::Talking(conversation)) => {
                    assert_eq!(conversation.participants, [7, 8]);
                }
                other => panic!("entity {id} not talking: {other:?}"),
            }
        }
    }

    #[test]
    fn messages_reach_both_participants_and_disk() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        write_entities(
            dir.path(),
            &[
                facing_right_player(7, 5.0, 5.0),
                Entity::player(8, village(6.0, 5.0)),
            ],
        );
        let mut world = load(dir.path());
        world.connect(7).unwrap();
        world.connect(8).unwrap();

        world.enqueue_action(7, Action::Interact);
        world.apply_tick();
        world.enqueue_action(7, Action::SendMessage { message: "hello".to_string() });
        world.apply_tick();

        for id in [7, 8] {
            let entity = world.entities().into_iter().find(|e| e.id() == id).unwrap();
            let Some(ChatState::Talking(conversation)) = entity.chat_state() else {
                panic!("entity {id} not talking");
            };
            assert_eq!(conversation.messages.len(), 1);
            assert_eq!(conversation.messages[0].message, "hello");
            assert_eq!(conversation.messages[0].sender_id, 7);
        }
        assert!(dir.path().join("conversations").join("7-8.json").exists());
    }

    #[test]
    fn closing_a_conversation_is_idempotent() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        write_entities(
            dir.path(),
            &[
                facing_right_player(7, 5.0, 5.0),
                Entity::player(8, village(6.0, 5.0)),
            ],
        );
        let mut world = load(dir.path());
        world.connect(7).unwrap();
        world.connect(8).unwrap();

        world.enqueue_action(7, Action::Interact);
        world.apply_tick();
        world.enqueue_action(7, Action::CloseConversation);
        world.enqueue_action(7, Action::CloseConversation);
        world.apply_tick();

        for id in [7, 8] {
            let entity = world.entities().into_iter().find(|e| e.id() == id).unwrap();
            assert_eq!(entity.chat_state(), Some(&ChatState::Idle));
        }
    }

    #[test]
    fn interacting_with_a_door_traverses_it() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        let mut door_facer = Entity::player(7, village(8.0, 9.0));
        *door_facer.facing_mut() = Facing::Up;
        write_entities(
            dir.path(),
            &[
                door_facer,
                Entity::door(100, village(8.0, 8.0), Location::new(Coords::new(1.0, 1.0), CELLAR)),
            ],
        );
        let mut world = load(dir.path());
        world.connect(7).unwrap();

        world.enqueue_action(7, Action::Interact);
        world.apply_tick();

        let me = world.entities().into_iter().find(|e| e.id() == 7).unwrap();
        assert_eq!(me.location().map, MapId::from(CELLAR));
        assert_eq!(me.location().coords, Coords::new(1.0, 1.0));
    }

    #[test]
    fn editor_edits_grow_the_map_and_persist() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        let mut world = load(dir.path());
        world.connect_editor().unwrap();

        world.enqueue_action(EDITOR_ID, Action::EditTile { x: 20, y: 3, tile: Tile::Path });
        world.enqueue_action(EDITOR_ID, Action::EditTile { x: -2, y: -1, tile: Tile::Sand });
        world.apply_tick();

        let map = world.maps().get(VILLAGE).unwrap();
        assert_eq!(map.tile((20, 3)), Tile::Path);
        assert_eq!(map.tile((-2, -1)), Tile::Sand);

        let on_disk: RawMap =
            persist::read_json(&dir.path().join("maps").join(VILLAGE)).unwrap();
        assert_eq!(on_disk.se[3][20], Tile::Path.id());
        assert_eq!(on_disk.se[3].len(), 21);
        assert_eq!(on_disk.nw[0][1], Tile::Sand.id());
    }

    #[test]
    fn regular_players_cannot_edit_tiles() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        let mut world = load(dir.path());
        world.connect(7).unwrap();

        world.enqueue_action(7, Action::EditTile { x: 3, y: 3, tile: Tile::Water });
        world.apply_tick();

        assert_eq!(world.maps().get(VILLAGE).unwrap().tile((3, 3)), Tile::Grass);
    }

    #[test]
    fn editors_move_faster_and_ignore_walls() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        write_entities(dir.path(), &[Entity::player(EDITOR_ID, village(5.0, 5.0))]);
        let mut world = load(dir.path());
        world.connect_editor().unwrap();

        // A regular player would be stopped by the wall at (6, 5).
        world.enqueue_action(EDITOR_ID, Action::MoveEntity { dx: 1.0, dy: 0.0 });
        world.apply_tick();

        let me = world.entities().into_iter().find(|e| e.id() == EDITOR_ID).unwrap();
        assert_eq!(me.location().coords, Coords::new(5.5, 5.0));
    }

    #[test]
    fn go_to_map_jumps_known_maps_only() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        let mut world = load(dir.path());
        world.connect(7).unwrap();

        world.enqueue_action(7, Action::GoToMap { map: "nowhere.json".to_string() });
        world.apply_tick();
        let me = world.entities().into_iter().find(|e| e.id() == 7).unwrap();
        assert_eq!(me.location().map, MapId::from(VILLAGE));

        world.enqueue_action(7, Action::GoToMap { map: CELLAR.to_string() });
        world.apply_tick();
        let me = world.entities().into_iter().find(|e| e.id() == 7).unwrap();
        assert_eq!(me.location().map, MapId::from(CELLAR));
    }

    #[test]
    fn rotate_applies_at_the_right_location() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        write_entities(
            dir.path(),
            &[Entity::door(100, village(8.0, 8.0), Location::new(Coords::new(1.0, 1.0), CELLAR))],
        );
        let mut world = load(dir.path());
        world.connect(7).unwrap();

        world.enqueue_action(
            7,
            Action::RotateEntity { id: 100, location: village(8.0, 8.0), facing: Facing::Left },
        );
        world.apply_tick();

        let door = world.entities().into_iter().find(|e| e.id() == 100).unwrap();
        assert_eq!(door.facing(), Facing::Left);
    }

    #[test]
    fn save_and_reload_round_trips_the_world() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        let mut world = load(dir.path());
        world.connect(7).unwrap();
        for _ in 0..5 {
            world.apply_tick();
        }
        world.save().unwrap();

        let reloaded = load(dir.path());
        assert_eq!(reloaded.clock().tick(), 5);
        let entities = reloaded.entities();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].id(), 7);
    }

    #[test]
    fn dark_maps_pin_the_light_level() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        write_entities(
            dir.path(),
            &[Entity::player(7, Location::new(Coords::new(1.0, 1.0), CELLAR))],
        );
        let mut world = load(dir.path());
        let cell = world.connect(7).unwrap();
        world.apply_tick();

        assert_eq!(cell.latest().light_level, 0.5);
    }

    #[test]
    fn find_map_resolves_names_and_ids() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        let world = load(dir.path());

        assert_eq!(world.find_map("Village").unwrap().record().file, VILLAGE);
        assert_eq!(world.find_map(VILLAGE).unwrap().record().name, "Village");
        assert!(matches!(world.find_map("Atlantis"), Err(WorldError::UnknownMap(_))));
    }
}
