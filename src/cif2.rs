//! CIF2 indicator word.
//!
//! CIF2 flags the identifier fields of a context or command packet: stream
//! relationships, controller and controllee identities, and the platform,
//! device and function tags.

use crate::indicator::indicator_word;

indicator_word! {
    /// CIF2 indicator word.
    pub struct Cif2 {
        /// Bind.
        bind = 31,
        /// Cited SID.
        cited_sid = 30,
        /// Sibling SID.
        sibling_sid = 29,
        /// Parent SID.
        parent_sid = 28,
        /// Child SID.
        child_sid = 27,
        /// Cited message ID.
        cited_message_id = 26,
        /// Controllee ID.
        controllee_id = 25,
        /// Controllee UUID.
        controllee_uuid = 24,
        /// Controller ID.
        controller_id = 23,
        /// Controller UUID.
        controller_uuid = 22,
        /// Information source.
        information_source = 21,
        /// Track ID.
        trace_id = 20,
        /// Country code.
        country_code = 19,
        /// Operator.
        operator = 18,
        /// Platform class.
        platform_class = 17,
        /// Platform instance.
        platform_instance = 16,
        /// Platform display.
        platform_display = 15,
        /// EMS device class.
        ems_device_class = 14,
        /// EMS device type.
        ems_device_type = 13,
        /// EMS device instance.
        ems_device_instance = 12,
        /// Modulation class.
        modulation_class = 11,
        /// Modulation type.
        modulation_type = 10,
        /// Function ID.
        function_id = 9,
        /// Mode ID.
        mode_id = 8,
        /// Event ID.
        event_id = 7,
        /// Function priority ID.
        function_priority_id = 6,
        /// Communication priority ID.
        communication_priority_id = 5,
        /// RF footprint.
        rf_footprint = 4,
        /// RF footprint range.
        rf_footprint_range = 3,
    }
}
