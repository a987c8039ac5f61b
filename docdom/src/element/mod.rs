mod content;
mod node;

pub use content::Content;
pub use node::{Element, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    find_by(root, &|el| el.id == id)
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    find_by_mut(root, &|el| el.id == id)
}

/// First element in tree order matching the predicate.
pub fn find_by<'a>(root: &'a Element, pred: &dyn Fn(&Element) -> bool) -> Option<&'a Element> {
    if pred(root) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_by(child, pred) {
                return Some(found);
            }
        }
    }

    None
}

/// First element in tree order matching the predicate, mutably.
pub fn find_by_mut<'a>(
    root: &'a mut Element,
    pred: &dyn Fn(&Element) -> bool,
) -> Option<&'a mut Element> {
    if pred(root) {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_by_mut(child, pred) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the parent of the element with the given ID.
pub fn find_parent_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    find_by_mut(root, &|el| el.child_elements().iter().any(|c| c.id == id))
}

/// Collect all element IDs in tree order.
pub fn collect_ids(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_ids_recursive(root, &mut result);
    result
}

fn collect_ids_recursive(element: &Element, result: &mut Vec<String>) {
    result.push(element.id.clone());
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_ids_recursive(child, result);
        }
    }
}
