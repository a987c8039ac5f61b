pub mod element;
pub mod event;
pub mod text;

pub use element::{
    collect_ids, find_by, find_by_mut, find_element, find_element_mut, find_parent_mut,
    Content, Element, Tag,
};
pub use event::{Event, Key, Modifiers, MouseButton};
