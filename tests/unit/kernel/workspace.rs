use super::*;
use crate::kernel::document::{ContentModel, DocumentView};
use crate::kernel::services::ports::content;
use crate::kernel::services::ports::prompt::{CloseChoice, ConfirmRequest};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// Serves every path with empty text; saving always succeeds in place.
#[derive(Default)]
struct MemoryHandler {
    opened: Cell<usize>,
}

impl ContentHandler for MemoryHandler {
    fn content_type(&self) -> &'static str {
        "memory"
    }

    fn new_content(&self) -> ContentModel {
        ContentModel::new()
    }

    fn open_content(&self, path: &Path) -> content::Result<ContentModel> {
        if path.starts_with("/missing") {
            return Err(ContentError::NoLocation);
        }
        self.opened.set(self.opened.get() + 1);
        Ok(ContentModel::from_file(path.to_path_buf(), "text"))
    }

    fn save_content(&self, document: &mut DocumentView, _save_as: bool) -> content::Result<()> {
        document.edit_model().set_dirty(false);
        Ok(())
    }

    fn save_content_to(&self, document: &mut DocumentView, path: &Path) -> content::Result<()> {
        document.edit_model().mark_saved(path.to_path_buf());
        Ok(())
    }
}

fn handler() -> Rc<MemoryHandler> {
    Rc::new(MemoryHandler::default())
}

fn make_dirty(workspace: &mut Workspace, id: DocumentId) {
    workspace
        .get_mut(id)
        .unwrap()
        .view_mut()
        .edit_model()
        .append("!");
}

fn events(workspace: &mut Workspace) -> Rc<RefCell<Vec<WorkspaceEvent>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    workspace.subscribe(move |e| sink.borrow_mut().push(*e));
    seen
}

#[test]
fn untitled_counter_is_per_workspace() {
    let mut first = Workspace::default();
    let mut second = Workspace::default();

    assert_eq!(first.next_untitled_title(), "Untitled-1");
    assert_eq!(first.next_untitled_title(), "Untitled-2");
    assert_eq!(second.next_untitled_title(), "Untitled-1");
}

#[test]
fn new_document_is_untitled_and_active() {
    let mut workspace = Workspace::default();
    let h = handler();

    let a = workspace.new_document(h.clone());
    let b = workspace.new_document(h.clone());

    assert_eq!(workspace.len(), 2);
    assert_eq!(workspace.get(a).unwrap().base_title(), "Untitled-1");
    assert_eq!(workspace.get(b).unwrap().base_title(), "Untitled-2");
    assert_eq!(workspace.active(), Some(b));
    assert!(workspace.get(b).unwrap().view().is_active());
    assert!(workspace.get(b).unwrap().view().is_selected());
    assert!(!workspace.get(a).unwrap().view().is_active());
    assert!(!workspace.get(a).unwrap().view().is_selected());
}

#[test]
fn documents_iterate_in_insertion_order() {
    let mut workspace = Workspace::default();
    let h = handler();
    let a = workspace.open_document(h.clone(), Path::new("/docs/a.txt")).unwrap();
    let b = workspace.open_document(h.clone(), Path::new("/docs/b.txt")).unwrap();
    let c = workspace.new_document(h.clone());

    let ids: Vec<_> = workspace.documents().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![a, b, c]);
    assert_eq!(workspace.ids(), &[a, b, c]);

    let titles: Vec<_> = workspace
        .documents()
        .map(|(_, d)| d.base_title().to_string())
        .collect();
    assert_eq!(titles, vec!["a.txt", "b.txt", "Untitled-1"]);
}

#[test]
fn reopening_a_path_reactivates_existing_document() {
    let mut workspace = Workspace::default();
    let h = handler();
    let a = workspace.open_document(h.clone(), Path::new("/docs/a.txt")).unwrap();
    let _b = workspace.open_document(h.clone(), Path::new("/docs/b.txt")).unwrap();

    let again = workspace.open_document(h.clone(), Path::new("/docs/a.txt")).unwrap();

    assert_eq!(again, a);
    assert_eq!(workspace.len(), 2);
    assert_eq!(workspace.active(), Some(a));
    assert_eq!(h.opened.get(), 2);
}

#[test]
fn open_failure_is_a_content_error() {
    let mut workspace = Workspace::default();
    let result = workspace.open_document(handler(), Path::new("/missing/a.txt"));

    assert!(matches!(result, Err(WorkspaceError::Content(_))));
    assert!(workspace.is_empty());
}

#[test]
fn removing_active_moves_activation_to_neighbour() {
    let mut workspace = Workspace::default();
    let h = handler();
    let a = workspace.new_document(h.clone());
    let b = workspace.new_document(h.clone());
    let c = workspace.new_document(h.clone());
    workspace.set_active(b).unwrap();

    let removed = workspace.remove(b).unwrap();
    assert!(!removed.view().is_active());
    assert_eq!(workspace.active(), Some(c));
    assert!(workspace.get(c).unwrap().view().is_active());

    workspace.remove(c);
    assert_eq!(workspace.active(), Some(a));

    workspace.remove(a);
    assert_eq!(workspace.active(), None);
    assert!(workspace.remove(a).is_none());
}

#[test]
fn set_active_unknown_is_an_error() {
    let mut workspace = Workspace::default();
    let id = workspace.new_document(handler());
    workspace.remove(id);

    assert!(matches!(
        workspace.set_active(id),
        Err(WorkspaceError::UnknownDocument(_))
    ));
}

#[test]
fn events_follow_collection_changes() {
    let mut workspace = Workspace::default();
    let seen = events(&mut workspace);
    let h = handler();

    let a = workspace.new_document(h.clone());
    workspace.set_active(a).unwrap();
    workspace
        .close_document(a, &mut |_: &ConfirmRequest| CloseChoice::Cancel)
        .unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            WorkspaceEvent::Added(a),
            WorkspaceEvent::ActiveChanged(Some(a)),
            WorkspaceEvent::Removed(a),
            WorkspaceEvent::ActiveChanged(None),
        ]
    );
}

#[test]
fn has_unsaved_changes() {
    let mut workspace = Workspace::default();
    let a = workspace.new_document(handler());
    assert!(!workspace.has_unsaved_changes());

    make_dirty(&mut workspace, a);
    assert!(workspace.has_unsaved_changes());
    assert_eq!(workspace.get(a).unwrap().display_title(), "Untitled-1*");
}

#[test]
fn close_all_stops_at_first_cancel() {
    let mut workspace = Workspace::default();
    let h = handler();
    let clean = workspace.new_document(h.clone());
    let dirty = workspace.new_document(h.clone());
    let after = workspace.new_document(h.clone());
    make_dirty(&mut workspace, dirty);
    make_dirty(&mut workspace, after);

    let mut asked = Vec::new();
    let mut prompt = |request: &ConfirmRequest| {
        asked.push(request.message.clone());
        CloseChoice::Cancel
    };
    let closed = workspace.close_all(&mut prompt).unwrap();

    assert!(!closed);
    assert!(!workspace.contains(clean));
    assert!(workspace.contains(dirty));
    assert!(workspace.contains(after));
    assert_eq!(asked, vec!["Save changes for document 'Untitled-2'?".to_string()]);
}

#[test]
fn close_all_completes_when_user_confirms() {
    let mut workspace = Workspace::default();
    let h = handler();
    let located = workspace
        .open_document(h.clone(), Path::new("/docs/a.txt"))
        .unwrap();
    let untitled = workspace.new_document(h.clone());
    make_dirty(&mut workspace, located);
    make_dirty(&mut workspace, untitled);

    let closed = workspace
        .close_all(&mut |_: &ConfirmRequest| CloseChoice::Save)
        .unwrap();

    assert!(closed);
    assert!(!workspace.contains(untitled));
    // Located documents are left for the save path to remove.
    assert!(workspace.contains(located));
    assert!(!workspace.has_unsaved_changes());
    assert_eq!(
        workspace.get(located).unwrap().location(),
        Some(PathBuf::from("/docs/a.txt").as_path())
    );
}
