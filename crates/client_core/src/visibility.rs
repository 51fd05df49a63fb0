use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, Mutex, PoisonError},
};

use futures::{
    stream::{self, BoxStream},
    Stream, StreamExt,
};
use shared::content::sections::VISIBILITY_THRESHOLD;
use tokio::sync::broadcast;
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};
use tracing::debug;

/// Source of "section entered/left the viewport" notifications.
pub trait ViewportObserver {
    fn observe(&self, section_id: &str) -> BoxStream<'static, bool>;
}

#[derive(Debug, Clone, Copy, Default)]
struct LastKnown {
    intersecting: bool,
    ever_intersected: bool,
}

/// Fan-out observer fed by a single notification source. Each call to
/// [`ViewportObserver::observe`] gets its own filtered subscription.
///
/// A subscriber that falls behind the channel resumes from the last known
/// state of its section, replaying an entry it may have missed.
#[derive(Debug, Clone)]
pub struct BroadcastViewportObserver {
    events: broadcast::Sender<(String, bool)>,
    last_known: Arc<Mutex<HashMap<String, LastKnown>>>,
}

impl BroadcastViewportObserver {
    pub fn new(capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity);
        Self {
            events,
            last_known: Arc::default(),
        }
    }

    /// Reports an intersection change for `section_id`. Returns false when
    /// nobody is observing.
    pub fn notify(&self, section_id: impl Into<String>, intersecting: bool) -> bool {
        let section_id = section_id.into();
        {
            let mut last_known = self
                .last_known
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let state = last_known.entry(section_id.clone()).or_default();
            state.intersecting = intersecting;
            state.ever_intersected |= intersecting;
        }
        self.events.send((section_id, intersecting)).is_ok()
    }

    /// Reports how much of `section_id` is on screen, as a 0..=1 ratio.
    pub fn notify_ratio(&self, section_id: impl Into<String>, visible_ratio: f64) -> bool {
        self.notify(section_id, visible_ratio >= VISIBILITY_THRESHOLD)
    }
}

impl ViewportObserver for BroadcastViewportObserver {
    fn observe(&self, section_id: &str) -> BoxStream<'static, bool> {
        let wanted = section_id.to_string();
        let last_known = Arc::clone(&self.last_known);
        BroadcastStream::new(self.events.subscribe())
            .flat_map(move |event| {
                let replay = match event {
                    Ok((id, intersecting)) if id == wanted => vec![intersecting],
                    Ok(_) => Vec::new(),
                    Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                        let state = last_known
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .get(&wanted)
                            .copied()
                            .unwrap_or_default();
                        debug!(section_id = %wanted, skipped, "viewport events lagged, resyncing");
                        if state.ever_intersected && !state.intersecting {
                            vec![true, false]
                        } else {
                            vec![state.intersecting]
                        }
                    }
                };
                stream::iter(replay)
            })
            .boxed()
    }
}

/// Merges one observation stream per section into `(section_id, intersecting)` events.
pub fn watch_sections<O: ViewportObserver + ?Sized>(
    observer: &O,
    section_ids: &[&str],
) -> BoxStream<'static, (String, bool)> {
    stream::select_all(section_ids.iter().map(|id| {
        let id = id.to_string();
        observer
            .observe(&id)
            .map(move |intersecting| (id.clone(), intersecting))
            .boxed()
    }))
    .boxed()
}

/// Per-page reveal flags. A section becomes visible the first time it
/// intersects the viewport and stays visible afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionVisibility {
    flags: BTreeMap<String, bool>,
}

impl SectionVisibility {
    pub fn new(section_ids: &[&str]) -> Self {
        Self {
            flags: section_ids
                .iter()
                .map(|id| (id.to_string(), false))
                .collect(),
        }
    }

    pub fn is_visible(&self, section_id: &str) -> bool {
        self.flags.get(section_id).copied().unwrap_or(false)
    }

    /// Returns true if this call revealed the section.
    pub fn mark_visible(&mut self, section_id: &str) -> bool {
        let flag = self.flags.entry(section_id.to_string()).or_insert(false);
        let revealed = !*flag;
        *flag = true;
        revealed
    }

    pub fn apply(&mut self, section_id: &str, intersecting: bool) -> bool {
        intersecting && self.mark_visible(section_id)
    }

    pub fn all_visible(&self) -> bool {
        self.flags.values().all(|visible| *visible)
    }

    /// Applies events until the stream ends or every section is revealed.
    pub async fn drive<St>(&mut self, mut events: St)
    where
        St: Stream<Item = (String, bool)> + Unpin,
    {
        while !self.all_visible() {
            let Some((section_id, intersecting)) = events.next().await else {
                break;
            };
            if self.apply(&section_id, intersecting) {
                debug!(%section_id, "section revealed");
            }
        }
    }
}
