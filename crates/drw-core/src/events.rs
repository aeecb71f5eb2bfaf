//! Adapting raw notify events into watcher events.

use notify::event::{CreateKind, ModifyKind, RenameMode};
use notify::{Event, EventKind};
use std::path::PathBuf;

/// What happened to a path in the watch directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEventKind {
    Created,
    Moved,
}

/// A single create/move observation. Ephemeral: produced by the OS, consumed
/// once by the watch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEvent {
    pub kind: WatchEventKind,
    pub path: PathBuf,
}

/// Flattens a raw notify event into zero or more watch events.
///
/// Only file creations and rename destinations matter here; data writes,
/// metadata changes, removals and rename sources are dropped. A
/// `RenameMode::Both` event carries `[from, to]`, so only its last path is a
/// destination.
pub fn from_notify(event: Event) -> Vec<WatchEvent> {
    match event.kind {
        EventKind::Create(CreateKind::Folder) => Vec::new(),
        EventKind::Create(_) => event
            .paths
            .into_iter()
            .map(|path| WatchEvent {
                kind: WatchEventKind::Created,
                path,
            })
            .collect(),
        EventKind::Modify(ModifyKind::Name(RenameMode::To | RenameMode::Any)) => event
            .paths
            .into_iter()
            .map(|path| WatchEvent {
                kind: WatchEventKind::Moved,
                path,
            })
            .collect(),
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => event
            .paths
            .into_iter()
            .last()
            .map(|path| WatchEvent {
                kind: WatchEventKind::Moved,
                path,
            })
            .into_iter()
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{DataChange, RemoveKind};

    #[test]
    fn file_creation_maps_to_created() {
        let ev = Event::new(EventKind::Create(CreateKind::File)).add_path("/d/a.pdf".into());
        let out = from_notify(ev);
        assert_eq!(
            out,
            vec![WatchEvent {
                kind: WatchEventKind::Created,
                path: "/d/a.pdf".into()
            }]
        );
    }

    #[test]
    fn folder_creation_is_ignored() {
        let ev = Event::new(EventKind::Create(CreateKind::Folder)).add_path("/d/sub".into());
        assert!(from_notify(ev).is_empty());
    }

    #[test]
    fn rename_destination_maps_to_moved() {
        let ev = Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::To)))
            .add_path("/d/report.pdf".into());
        let out = from_notify(ev);
        assert_eq!(out[0].kind, WatchEventKind::Moved);
        assert_eq!(out[0].path, PathBuf::from("/d/report.pdf"));
    }

    #[test]
    fn paired_rename_uses_only_the_destination() {
        let ev = Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::Both)))
            .add_path("/d/report.pdf.download".into())
            .add_path("/d/report.pdf".into());
        let out = from_notify(ev);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, PathBuf::from("/d/report.pdf"));
    }

    #[test]
    fn writes_removals_and_rename_sources_are_ignored() {
        for kind in [
            EventKind::Modify(ModifyKind::Data(DataChange::Content)),
            EventKind::Modify(ModifyKind::Name(RenameMode::From)),
            EventKind::Remove(RemoveKind::File),
            EventKind::Access(notify::event::AccessKind::Any),
        ] {
            let ev = Event::new(kind).add_path("/d/x".into());
            assert!(from_notify(ev).is_empty(), "kind should be ignored");
        }
    }
}
