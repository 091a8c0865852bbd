//! Command packet words.
//!
//! The control/acknowledge mode word ([`Cam`]) and its control and
//! acknowledge specializations, the WIF0 and EIF0 indicator words of
//! acknowledge packets, and the warning/error field word.

use crate::cif0::Cif0;
use crate::cif1::Cif1;
use crate::cif2::Cif2;
use crate::cif3::Cif3;
use crate::cif7::Cif7;
use crate::field::{fixed_size_field, read_u32, write_u32};
use crate::indicator::{bit_is_set, bit_mask, indicator_word, IndicatorWord};
use core::ops::{Deref, DerefMut};

/// Format of the controllee and controller identifiers.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ControlFormat {
    /// 32-bit identifier.
    #[default]
    Id,
    /// 128-bit UUID.
    Uuid,
}

impl ControlFormat {
    fn from_bit(bit: bool) -> ControlFormat {
        if bit {
            ControlFormat::Uuid
        } else {
            ControlFormat::Id
        }
    }
}

/// Action mode.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ActionMode {
    /// Take no action.
    #[default]
    NoAction,
    /// Dry run.
    DryRun,
    /// Execute.
    Execute,
    /// Reserved code.
    Reserved,
}

impl ActionMode {
    /// Returns the 2-bit code of the action mode.
    pub fn code(self) -> u8 {
        match self {
            ActionMode::NoAction => 0,
            ActionMode::DryRun => 1,
            ActionMode::Execute => 2,
            ActionMode::Reserved => 3,
        }
    }

    /// Returns the action mode given its 2-bit code.
    ///
    /// Only the 2 LSBs of `code` are used.
    pub fn from_code(code: u8) -> ActionMode {
        match code & 0x3 {
            0 => ActionMode::NoAction,
            1 => ActionMode::DryRun,
            2 => ActionMode::Execute,
            _ => ActionMode::Reserved,
        }
    }
}

/// Control/acknowledge mode word.
///
/// This holds the fields shared by control and acknowledge packets. See
/// [`ControlCam`] and [`AcknowledgeCam`] for the fields that only appear in
/// one of them.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cam {
    /// The controllee identifier is present.
    pub controllee_enable: bool,
    /// Format of the controllee identifier.
    pub controllee_format: ControlFormat,
    /// The controller identifier is present.
    pub controller_enable: bool,
    /// Format of the controller identifier.
    pub controller_format: ControlFormat,
    /// Partial execution of the command is permitted.
    pub permit_partial: bool,
    /// Execution with warnings is permitted.
    pub permit_warnings: bool,
    /// Execution with errors is permitted.
    pub permit_errors: bool,
    /// Action mode.
    pub action_mode: ActionMode,
    /// Only send an acknowledge if the command is not executed.
    pub nack_only: bool,
    /// Timing control code (3 bits).
    pub timing_control: u8,
}

impl Cam {
    /// Size in bytes.
    pub const SIZE: usize = 4;

    fn write(&self, out: &mut [u8]) {
        write_u32(out, 0, self.to_word());
    }

    fn read(input: &[u8]) -> Cam {
        Cam::from_word(read_u32(input, 0))
    }
}

impl IndicatorWord for Cam {
    const BITS: &'static [(&'static str, u8)] = &[
        ("controllee_enable", 31),
        ("controllee_format", 30),
        ("controller_enable", 29),
        ("controller_format", 28),
        ("permit_partial", 27),
        ("permit_warnings", 26),
        ("permit_errors", 25),
        ("nack_only", 22),
    ];

    fn to_word(&self) -> u32 {
        bit_mask(self.controllee_enable, 31)
            | bit_mask(self.controllee_format == ControlFormat::Uuid, 30)
            | bit_mask(self.controller_enable, 29)
            | bit_mask(self.controller_format == ControlFormat::Uuid, 28)
            | bit_mask(self.permit_partial, 27)
            | bit_mask(self.permit_warnings, 26)
            | bit_mask(self.permit_errors, 25)
            | (u32::from(self.action_mode.code()) << 23)
            | bit_mask(self.nack_only, 22)
            | (u32::from(self.timing_control & 0x7) << 12)
    }

    fn from_word(word: u32) -> Cam {
        log::trace!("CAM word {:#010x}", word);
        Cam {
            controllee_enable: bit_is_set(word, 31),
            controllee_format: ControlFormat::from_bit(bit_is_set(word, 30)),
            controller_enable: bit_is_set(word, 29),
            controller_format: ControlFormat::from_bit(bit_is_set(word, 28)),
            permit_partial: bit_is_set(word, 27),
            permit_warnings: bit_is_set(word, 26),
            permit_errors: bit_is_set(word, 25),
            action_mode: ActionMode::from_code((word >> 23) as u8),
            nack_only: bit_is_set(word, 22),
            timing_control: ((word >> 12) & 0x7) as u8,
        }
    }
}

fixed_size_field!(Cam, Cam::SIZE);

/// CAM of a control packet.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ControlCam {
    /// Common CAM fields.
    pub cam: Cam,
    /// Request validation acknowledge.
    pub req_v: bool,
    /// Request execution acknowledge.
    pub req_x: bool,
    /// Request query-state acknowledge.
    pub req_s: bool,
    /// Request warnings.
    pub req_w: bool,
    /// Request errors.
    pub req_er: bool,
}

impl ControlCam {
    /// Size in bytes.
    pub const SIZE: usize = Cam::SIZE;

    fn write(&self, out: &mut [u8]) {
        let word = self.cam.to_word()
            | bit_mask(self.req_v, 20)
            | bit_mask(self.req_x, 19)
            | bit_mask(self.req_s, 18)
            | bit_mask(self.req_w, 17)
            | bit_mask(self.req_er, 16);
        write_u32(out, 0, word);
    }

    fn read(input: &[u8]) -> ControlCam {
        let word = read_u32(input, 0);
        ControlCam {
            cam: Cam::read(input),
            req_v: bit_is_set(word, 20),
            req_x: bit_is_set(word, 19),
            req_s: bit_is_set(word, 18),
            req_w: bit_is_set(word, 17),
            req_er: bit_is_set(word, 16),
        }
    }
}

fixed_size_field!(ControlCam, ControlCam::SIZE);

/// CAM of an acknowledge packet.
///
/// `scheduled_or_executed` shares bit 14 with the MSB of the timing control
/// code of [`Cam`]. Both are ORed together when packing.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct AcknowledgeCam {
    /// Common CAM fields.
    pub cam: Cam,
    /// Validation acknowledge.
    pub ack_v: bool,
    /// Execution acknowledge.
    pub ack_x: bool,
    /// Query-state acknowledge.
    pub ack_s: bool,
    /// Warnings are reported.
    pub ack_w: bool,
    /// Errors are reported.
    pub ack_er: bool,
    /// The command was only partially executed.
    pub partial_action: bool,
    /// The action was scheduled or executed.
    pub scheduled_or_executed: bool,
}

impl AcknowledgeCam {
    /// Size in bytes.
    pub const SIZE: usize = Cam::SIZE;

    fn write(&self, out: &mut [u8]) {
        let word = self.cam.to_word()
            | bit_mask(self.ack_v, 20)
            | bit_mask(self.ack_x, 19)
            | bit_mask(self.ack_s, 18)
            | bit_mask(self.ack_w, 17)
            | bit_mask(self.ack_er, 16)
            | bit_mask(self.partial_action, 15)
            | bit_mask(self.scheduled_or_executed, 14);
        write_u32(out, 0, word);
    }

    fn read(input: &[u8]) -> AcknowledgeCam {
        let word = read_u32(input, 0);
        AcknowledgeCam {
            cam: Cam::read(input),
            ack_v: bit_is_set(word, 20),
            ack_x: bit_is_set(word, 19),
            ack_s: bit_is_set(word, 18),
            ack_w: bit_is_set(word, 17),
            ack_er: bit_is_set(word, 16),
            partial_action: bit_is_set(word, 15),
            scheduled_or_executed: bit_is_set(word, 14),
        }
    }
}

fixed_size_field!(AcknowledgeCam, AcknowledgeCam::SIZE);

// Defines a view of the CIF0 word that names the indicator enables of the
// CIF7, CIF3, CIF2 and CIF1 words after the acknowledge word they flag.
macro_rules! cif0_view {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $i7:ident, $set_i7:ident,
            $i3:ident, $set_i3:ident,
            $i2:ident, $set_i2:ident,
            $i1:ident, $set_i1:ident,
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
        pub struct $name(pub Cif0);

        impl $name {
            /// Size in bytes.
            pub const SIZE: usize = Cif0::SIZE;

            /// Returns `true` if the indicator word 7 follows.
            pub fn $i7(&self) -> bool {
                self.0.if7_enable
            }

            /// Sets the presence of the indicator word 7.
            pub fn $set_i7(&mut self, value: bool) {
                self.0.if7_enable = value;
            }

            /// Returns `true` if the indicator word 3 follows.
            pub fn $i3(&self) -> bool {
                self.0.if3_enable
            }

            /// Sets the presence of the indicator word 3.
            pub fn $set_i3(&mut self, value: bool) {
                self.0.if3_enable = value;
            }

            /// Returns `true` if the indicator word 2 follows.
            pub fn $i2(&self) -> bool {
                self.0.if2_enable
            }

            /// Sets the presence of the indicator word 2.
            pub fn $set_i2(&mut self, value: bool) {
                self.0.if2_enable = value;
            }

            /// Returns `true` if the indicator word 1 follows.
            pub fn $i1(&self) -> bool {
                self.0.if1_enable
            }

            /// Sets the presence of the indicator word 1.
            pub fn $set_i1(&mut self, value: bool) {
                self.0.if1_enable = value;
            }

            fn write(&self, out: &mut [u8]) {
                self.0.write(out);
            }

            fn read(input: &[u8]) -> $name {
                $name(Cif0::read(input))
            }
        }

        impl From<Cif0> for $name {
            fn from(cif0: Cif0) -> $name {
                $name(cif0)
            }
        }

        impl Deref for $name {
            type Target = Cif0;

            fn deref(&self) -> &Cif0 {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Cif0 {
                &mut self.0
            }
        }

        fixed_size_field!($name, $name::SIZE);
    };
}

cif0_view! {
    /// WIF0 word of an acknowledge packet.
    ///
    /// Flags the fields that have warnings. It has the layout of CIF0, with
    /// the CIF7, CIF3, CIF2 and CIF1 enables flagging WIF7, WIF3, WIF2 and
    /// WIF1.
    pub struct Wif0 {
        wif7_enable, set_wif7_enable,
        wif3_enable, set_wif3_enable,
        wif2_enable, set_wif2_enable,
        wif1_enable, set_wif1_enable,
    }
}

cif0_view! {
    /// EIF0 word of an acknowledge packet.
    ///
    /// Flags the fields that have errors. It has the layout of CIF0, with
    /// the CIF7, CIF3, CIF2 and CIF1 enables flagging EIF7, EIF3, EIF2 and
    /// EIF1.
    pub struct Eif0 {
        eif7_enable, set_eif7_enable,
        eif3_enable, set_eif3_enable,
        eif2_enable, set_eif2_enable,
        eif1_enable, set_eif1_enable,
    }
}

/// WIF1 word. Same layout as CIF1.
pub type Wif1 = Cif1;
/// WIF2 word. Same layout as CIF2.
pub type Wif2 = Cif2;
/// WIF3 word. Same layout as CIF3.
pub type Wif3 = Cif3;
/// WIF7 word. Same layout as CIF7.
pub type Wif7 = Cif7;
/// EIF1 word. Same layout as CIF1.
pub type Eif1 = Cif1;
/// EIF2 word. Same layout as CIF2.
pub type Eif2 = Cif2;
/// EIF3 word. Same layout as CIF3.
pub type Eif3 = Cif3;
/// EIF7 word. Same layout as CIF7.
pub type Eif7 = Cif7;

indicator_word! {
    /// Warning/error field.
    ///
    /// Sent in an acknowledge packet for each field flagged in the WIF or
    /// EIF words.
    pub struct WarningErrorFields {
        /// The field was not executed.
        field_not_executed = 31,
        /// Device failure.
        device_failure = 30,
        /// The field is erroneous.
        erroneous_field = 29,
        /// Parameter out of range.
        param_out_of_range = 28,
        /// Parameter with unsupported precision.
        param_unsupported_precision = 27,
        /// The field value is invalid.
        field_value_invalid = 26,
        /// Timestamp problem.
        timestamp_problem = 25,
        /// Hazardous power levels.
        hazardous_power_levels = 24,
        /// Distortion.
        distortion = 23,
        /// In-band power compliance.
        in_band_power_compliance = 22,
        /// Out-of-band power compliance.
        out_of_band_power_compliance = 21,
        /// Co-site interference.
        cosite_interference = 20,
        /// Regional interference.
        regional_interference = 19,
    }
}
