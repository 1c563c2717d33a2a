mod decode;
mod encode;
mod index;

pub use decode::{decode, decode_slot, is_list_space};
pub use encode::{encode, encode_element, slot_text};
pub use index::{resolve_index, IndexBound};
