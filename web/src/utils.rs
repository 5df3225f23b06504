use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;
use yew::prelude::*;

/// LocalStorage-backed value with a fixed, versioned key.
pub(crate) trait StorageKey: Sized {
    const KEY: &'static str;

    fn local_or_default() -> Self
    where
        Self: DeserializeOwned + Default,
    {
        LocalStorage::get(Self::KEY).unwrap_or_default()
    }

    fn local_get() -> Option<Self>
    where
        Self: DeserializeOwned,
    {
        LocalStorage::get(Self::KEY).ok()
    }

    fn local_save(&self)
    where
        Self: Serialize,
    {
        if let Err(err) = LocalStorage::set(Self::KEY, self) {
            log::error!("failed to save {}: {:?}", Self::KEY, err);
        }
    }

    fn local_clear() {
        LocalStorage::delete(Self::KEY);
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub children: Html,
}

/// Helper component to attatch the contents into the document.body instead of in the place where it's used.
#[function_component]
pub(crate) fn Modal(props: &ModalProps) -> Html {
    let modal_host = gloo::utils::body();
    create_portal(props.children.clone(), modal_host.into())
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Formats a value for the three-digit counters in the nav bar.
pub(crate) fn format_for_counter(value: i32) -> String {
    format!("{:03}", value.clamp(-99, 999))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_pads_to_three_digits() {
        assert_eq!(format_for_counter(0), "000");
        assert_eq!(format_for_counter(7), "007");
        assert_eq!(format_for_counter(42), "042");
        assert_eq!(format_for_counter(123), "123");
    }

    #[test]
    fn counter_clamps_out_of_range_values() {
        assert_eq!(format_for_counter(1234), "999");
        assert_eq!(format_for_counter(-1), "-01");
        assert_eq!(format_for_counter(-100), "-99");
    }
}
