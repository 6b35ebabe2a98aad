//! The threaded server loop.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use wl_world::{WandererBrain, World, WorldResult};

use crate::config::ServerConfig;
use crate::control::ServerControl;

const AUTOSAVE_POLL: Duration = Duration::from_millis(250);

/// Run a world until shutdown.
///
/// The calling thread becomes the tick loop. One thread per wanderer
/// polls its snapshot cell and feeds decisions back through the action
/// inboxes, and an optional autosave thread saves in the background.
/// When [`ServerControl::request_shutdown`] fires, or the configured
/// tick limit is reached, all threads wind down and the world is saved
/// one final time.
pub fn run(mut world: World, config: ServerConfig, control: ServerControl) -> WorldResult<()> {
    let tick_duration = world.config().tick_duration();
    let inboxes = world.inboxes();

    let mut brains = Vec::new();
    for id in world.wanderer_ids() {
        brains.push((id, world.connect_npc(id)));
    }

    let world = Arc::new(Mutex::new(world));
    let mut workers = Vec::new();

    for (id, cell) in brains {
        let control = control.clone();
        let inboxes = inboxes.clone();
        let poll = config.ai_poll_interval;
        workers.push(thread::spawn(move || {
            let mut brain = WandererBrain::new();
            while control.is_running() {
                let state = cell.latest();
                for action in brain.decide(&state) {
                    inboxes.push(id, action);
                }
                thread::sleep(poll);
            }
        }));
    }

    if let Some(worker) =
        spawn_autosave_loop(Arc::clone(&world), control.clone(), config.autosave_interval)
    {
        workers.push(worker);
    }

    tracing::info!(?tick_duration, workers = workers.len(), "server running");

    let mut ticks_run: u64 = 0;
    while control.is_running() {
        {
            let mut world = world.lock().expect("world lock");
            world.apply_tick();
        }
        ticks_run += 1;
        if let Some(limit) = config.tick_limit
            && ticks_run >= limit
        {
            control.request_shutdown();
            continue;
        }
        thread::sleep(tick_duration);
    }

    tracing::info!(ticks_run, "server stopping");
    for worker in workers {
        let _ = worker.join();
    }

    let world = world.lock().expect("world lock");
    world.save()
}

/// Spawn the background save thread, or `None` when autosaving is off.
///
/// The loop sleeps in short steps so a shutdown request is noticed close
/// to immediately even with a long save interval.
fn spawn_autosave_loop(
    world: Arc<Mutex<World>>,
    control: ServerControl,
    interval: Option<Duration>,
) -> Option<thread::JoinHandle<()>> {
    let interval = interval?;
    Some(thread::spawn(move || {
        let mut since_save = Duration::ZERO;
        while control.is_running() {
            thread::sleep(AUTOSAVE_POLL);
            since_save += AUTOSAVE_POLL;
            if since_save < interval {
                continue;
            }
            since_save = Duration::ZERO;
            if let Ok(world) = world.lock()
                && let Err(e) = world.save()
            {
                tracing::warn!(error = %e, "autosave failed");
            }
        }
    }))
}
