//! The command taxonomy.
//!
//! Every command the machine understands is described by a [`CommandKind`]:
//! how its head word is recognized, which parameter letters it accepts, the
//! modal group it belongs to (if any), its execution rank within a block, the
//! parameter subset retained in modal state, and the effect the orchestrator
//! applies. The whole taxonomy is one static registration table; there is no
//! runtime discovery.
//!
//! "Command" here covers more than literal `G` words: `M`, `F`, `S` and `T`
//! words trigger actions or mode changes too, so they live in the same table.
//!
//! Modal groups: only one member of a group can be active at a time (G20/G21
//! can't both hold, a machine can't move linearly and in an arc at once).
//! The group numbering follows the LinuxCNC tables
//! (<http://linuxcnc.org/docs/html/gcode/overview.html#_modal_groups>), with
//! M-groups offset by 100 and three synthetic groups (>200) for F, S and T so
//! they participate in conflict checks and modal memory like everything else.
//!
//! Execution ranks are the LinuxCNC order-of-execution steps, scaled to leave
//! room between them, with one deliberate change: distance mode (G90/G91)
//! runs at rank 35, ahead of the spindle family, so a distance-mode word
//! always precedes spindle/motion words when a block is sequenced.

use super::modal_group;
use crate::machine::position::Unit;
use crate::parser::word::Word;

/// How a kind's head word is recognized.
#[derive(Debug, Clone, Copy)]
pub enum Head {
    /// Exact match on the word's lookup key (letter + shortest value form).
    Key(&'static str),
    /// Predicate over the word, for kinds spanning a letter or value range.
    Match(fn(&Word) -> bool),
}

/// Static descriptor for one command kind.
#[derive(Debug)]
pub struct CommandKind {
    pub name: &'static str,
    pub doc: &'static str,
    pub head: Head,
    /// Parameter letters this command accepts.
    pub params: &'static str,
    pub modal_group: Option<u16>,
    /// Parameter letters retained when the command is copied into modal
    /// state. Most parameters are not remembered.
    pub modal_params: &'static str,
    /// Execution rank: lower runs first within a block.
    pub exec_order: u16,
    pub effect: Effect,
}

impl CommandKind {
    pub fn accepts(&self, letter: char) -> bool {
        self.params.contains(letter)
    }

    pub fn persists(&self, letter: char) -> bool {
        self.modal_params.contains(letter)
    }
}

/// What applying a command does to the machine.
///
/// Mode-only commands use `None`; some `None`-like variants carry the
/// metadata the orchestrator reads back out of modal state (the selected
/// plane's normal axis, the distance interpretation, the active unit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    Move,
    RapidMove,
    CannedCycle,
    CancelCannedCycle,
    DistanceMode { incremental: bool },
    CannedReturnMode { to_r: bool },
    SelectPlane { normal_axis: Option<char> },
    SelectCoordSystem { id: u8 },
    SetUnits { unit: Unit },
    SetOffset,
    ClearOffset,
    RestoreOffset,
}

// Axis letters accepted by every motion command.
const MOTION: &str = "XYZABCUVW";

const BASE: CommandKind = CommandKind {
    name: "",
    doc: "",
    head: Head::Key(""),
    params: "",
    modal_group: None,
    modal_params: "",
    exec_order: 999,
    effect: Effect::None,
};

fn is_line_number(w: &Word) -> bool {
    w.letter() == 'N'
}

fn is_program_name(w: &Word) -> bool {
    w.letter() == 'O'
}

fn is_feed_rate(w: &Word) -> bool {
    w.letter() == 'F'
}

fn is_spindle_speed(w: &Word) -> bool {
    w.letter() == 'S'
}

fn is_tool_select(w: &Word) -> bool {
    w.letter() == 'T'
}

fn code(w: &Word, letter: char) -> Option<f64> {
    if w.letter() == letter {
        w.value().as_f64()
    } else {
        None
    }
}

fn is_straight_probe(w: &Word) -> bool {
    matches!(code(w, 'G'), Some(v) if (38.2..=38.5).contains(&v))
}

fn is_goto_predefined(w: &Word) -> bool {
    matches!(code(w, 'G'), Some(v) if v == 28.0 || v == 30.0)
}

fn is_set_predefined(w: &Word) -> bool {
    matches!(code(w, 'G'), Some(v) if v == 28.1 || v == 30.1)
}

fn is_reset_coord_offset(w: &Word) -> bool {
    matches!(code(w, 'G'), Some(v) if v == 92.1 || v == 92.2)
}

fn is_user_defined(w: &Word) -> bool {
    matches!(code(w, 'M'), Some(v) if (101.0..=199.0).contains(&v))
}

/// The full registration table.
pub static KINDS: &[CommandKind] = &[
    // ======================= Non Operational =======================
    CommandKind {
        name: "LineNumber",
        doc: "N: Line Number",
        head: Head::Match(is_line_number),
        exec_order: 0,
        ..BASE
    },
    CommandKind {
        name: "ProgramName",
        doc: "O: Program Name",
        head: Head::Match(is_program_name),
        exec_order: 1,
        ..BASE
    },
    // ======================= Motion =======================
    //   (X Y Z A B C U V W apply to all motions)
    CommandKind {
        name: "RapidMove",
        doc: "G0: Rapid Move",
        head: Head::Key("G0"),
        params: MOTION,
        modal_group: Some(modal_group::MOTION),
        exec_order: 242,
        effect: Effect::RapidMove,
        ..BASE
    },
    CommandKind {
        name: "LinearMove",
        doc: "G1: Linear Move",
        head: Head::Key("G1"),
        params: MOTION,
        modal_group: Some(modal_group::MOTION),
        exec_order: 242,
        effect: Effect::Move,
        ..BASE
    },
    CommandKind {
        name: "ArcMoveCW",
        doc: "G2: Arc Move (clockwise)",
        head: Head::Key("G2"),
        params: "XYZABCUVWIJKRP",
        modal_group: Some(modal_group::MOTION),
        exec_order: 242,
        effect: Effect::Move,
        ..BASE
    },
    CommandKind {
        name: "ArcMoveCCW",
        doc: "G3: Arc Move (counter-clockwise)",
        head: Head::Key("G3"),
        params: "XYZABCUVWIJKRP",
        modal_group: Some(modal_group::MOTION),
        exec_order: 242,
        effect: Effect::Move,
        ..BASE
    },
    CommandKind {
        // one of the few motion words that isn't modal
        name: "Dwell",
        doc: "G4: Dwell",
        head: Head::Key("G4"),
        params: "P",
        exec_order: 140,
        ..BASE
    },
    CommandKind {
        name: "CubicSpline",
        doc: "G5: Cubic Spline",
        head: Head::Key("G5"),
        params: "XYZABCUVWIJPQ",
        modal_group: Some(modal_group::MOTION),
        exec_order: 242,
        effect: Effect::Move,
        ..BASE
    },
    CommandKind {
        name: "QuadraticSpline",
        doc: "G5.1: Quadratic Spline",
        head: Head::Key("G5.1"),
        params: "XYZABCUVWIJ",
        modal_group: Some(modal_group::MOTION),
        exec_order: 242,
        effect: Effect::Move,
        ..BASE
    },
    CommandKind {
        name: "Nurbs",
        doc: "G5.2: Non-uniform rational basis spline (NURBS)",
        head: Head::Key("G5.2"),
        params: "XYZABCUVWPL",
        modal_group: Some(modal_group::MOTION),
        exec_order: 242,
        effect: Effect::Move,
        ..BASE
    },
    CommandKind {
        name: "NurbsEnd",
        doc: "G5.3: end NURBS mode",
        head: Head::Key("G5.3"),
        params: "XYZABCUVWPL",
        modal_group: Some(modal_group::MOTION),
        exec_order: 242,
        effect: Effect::Move,
        ..BASE
    },
    CommandKind {
        name: "StraightProbe",
        doc: "G38.2-G38.5: Straight Probe",
        head: Head::Match(is_straight_probe),
        params: MOTION,
        modal_group: Some(modal_group::MOTION),
        exec_order: 242,
        effect: Effect::Move,
        ..BASE
    },
    CommandKind {
        name: "SpindleSyncMotion",
        doc: "G33: Spindle Synchronized Motion",
        head: Head::Key("G33"),
        params: "XYZABCUVWK",
        modal_group: Some(modal_group::MOTION),
        exec_order: 242,
        effect: Effect::Move,
        ..BASE
    },
    CommandKind {
        name: "RigidTapping",
        doc: "G33.1: Rigid Tapping",
        head: Head::Key("G33.1"),
        params: "XYZABCUVWK",
        modal_group: Some(modal_group::MOTION),
        exec_order: 242,
        effect: Effect::Move,
        ..BASE
    },
    CommandKind {
        // G80 technically belongs to the motion group, but it's often written
        // on the same line as another motion word ("G00 G80"); it runs just
        // before any motion and clears the motion mode.
        name: "CancelCannedCycle",
        doc: "G80: Cancel Canned Cycle",
        head: Head::Key("G80"),
        params: MOTION,
        exec_order: 241,
        effect: Effect::CancelCannedCycle,
        ..BASE
    },
    // ======================= Canned Cycles =======================
    //   (X Y Z or U V W apply, depending on active plane)
    CommandKind {
        name: "DrillingCycle",
        doc: "G81: Drilling Cycle",
        head: Head::Key("G81"),
        params: "XYZUVWRLP",
        modal_group: Some(modal_group::MOTION),
        modal_params: "XYZUVWRP",
        exec_order: 242,
        effect: Effect::CannedCycle,
        ..BASE
    },
    CommandKind {
        name: "DrillingCycleDwell",
        doc: "G82: Drilling Cycle, Dwell",
        head: Head::Key("G82"),
        params: "XYZUVWRLP",
        modal_group: Some(modal_group::MOTION),
        modal_params: "XYZUVWRP",
        exec_order: 242,
        effect: Effect::CannedCycle,
        ..BASE
    },
    CommandKind {
        name: "DrillingCyclePeck",
        doc: "G83: Drilling Cycle, Peck",
        head: Head::Key("G83"),
        params: "XYZUVWRLQ",
        modal_group: Some(modal_group::MOTION),
        modal_params: "XYZUVWRQ",
        exec_order: 242,
        effect: Effect::CannedCycle,
        ..BASE
    },
    CommandKind {
        name: "DrillingCycleChipBreaking",
        doc: "G73: Drilling Cycle, Chip Breaking",
        head: Head::Key("G73"),
        params: "XYZUVWRLQ",
        modal_group: Some(modal_group::MOTION),
        modal_params: "XYZUVWRQ",
        exec_order: 242,
        effect: Effect::CannedCycle,
        ..BASE
    },
    CommandKind {
        name: "BoringCycleFeedOut",
        doc: "G85: Boring Cycle, Feed Out",
        head: Head::Key("G85"),
        params: "XYZUVWRLP",
        modal_group: Some(modal_group::MOTION),
        modal_params: "XYZUVWRP",
        exec_order: 242,
        effect: Effect::CannedCycle,
        ..BASE
    },
    CommandKind {
        name: "BoringCycleDwellFeedOut",
        doc: "G89: Boring Cycle, Dwell, Feed Out",
        head: Head::Key("G89"),
        params: "XYZUVWRLP",
        modal_group: Some(modal_group::MOTION),
        modal_params: "XYZUVWRP",
        exec_order: 242,
        effect: Effect::CannedCycle,
        ..BASE
    },
    CommandKind {
        name: "ThreadingCycle",
        doc: "G76: Threading Cycle",
        head: Head::Key("G76"),
        params: "XYZUVWPIJRKQHLE",
        modal_group: Some(modal_group::MOTION),
        exec_order: 242,
        effect: Effect::CannedCycle,
        ..BASE
    },
    // ======================= Distance Mode =======================
    CommandKind {
        name: "AbsoluteDistanceMode",
        doc: "G90: Absolute Distance Mode",
        head: Head::Key("G90"),
        modal_group: Some(modal_group::DISTANCE),
        exec_order: 35,
        effect: Effect::DistanceMode { incremental: false },
        ..BASE
    },
    CommandKind {
        name: "IncrementalDistanceMode",
        doc: "G91: Incremental Distance Mode",
        head: Head::Key("G91"),
        modal_group: Some(modal_group::DISTANCE),
        exec_order: 35,
        effect: Effect::DistanceMode { incremental: true },
        ..BASE
    },
    CommandKind {
        name: "AbsoluteArcDistanceMode",
        doc: "G90.1: Absolute Distance Mode for Arc IJK Parameters",
        head: Head::Key("G90.1"),
        modal_group: Some(modal_group::ARC_IJK_DISTANCE),
        exec_order: 210,
        ..BASE
    },
    CommandKind {
        name: "IncrementalArcDistanceMode",
        doc: "G91.1: Incremental Distance Mode for Arc IJK Parameters",
        head: Head::Key("G91.1"),
        modal_group: Some(modal_group::ARC_IJK_DISTANCE),
        exec_order: 210,
        ..BASE
    },
    CommandKind {
        name: "LatheDiameterMode",
        doc: "G7: Lathe Diameter Mode",
        head: Head::Key("G7"),
        modal_group: Some(modal_group::LATHE_DIAMETER),
        exec_order: 210,
        ..BASE
    },
    CommandKind {
        name: "LatheRadiusMode",
        doc: "G8: Lathe Radius Mode",
        head: Head::Key("G8"),
        modal_group: Some(modal_group::LATHE_DIAMETER),
        exec_order: 210,
        ..BASE
    },
    // ======================= Feed Rate Mode =======================
    CommandKind {
        name: "InverseTimeMode",
        doc: "G93: Inverse Time Mode",
        head: Head::Key("G93"),
        modal_group: Some(modal_group::FEED_RATE_MODE),
        exec_order: 30,
        ..BASE
    },
    CommandKind {
        name: "UnitsPerMinuteMode",
        doc: "G94: Units Per Minute Mode",
        head: Head::Key("G94"),
        modal_group: Some(modal_group::FEED_RATE_MODE),
        exec_order: 30,
        ..BASE
    },
    CommandKind {
        name: "UnitsPerRevolutionMode",
        doc: "G95: Units Per Revolution Mode",
        head: Head::Key("G95"),
        modal_group: Some(modal_group::FEED_RATE_MODE),
        exec_order: 30,
        ..BASE
    },
    // ======================= Spindle Control =======================
    CommandKind {
        name: "StartSpindleCW",
        doc: "M3: Start Spindle Clockwise",
        head: Head::Key("M3"),
        modal_group: Some(modal_group::SPINDLE),
        exec_order: 90,
        ..BASE
    },
    CommandKind {
        name: "StartSpindleCCW",
        doc: "M4: Start Spindle Counter-Clockwise",
        head: Head::Key("M4"),
        modal_group: Some(modal_group::SPINDLE),
        exec_order: 90,
        ..BASE
    },
    CommandKind {
        name: "StopSpindle",
        doc: "M5: Stop Spindle",
        head: Head::Key("M5"),
        modal_group: Some(modal_group::SPINDLE),
        exec_order: 90,
        ..BASE
    },
    CommandKind {
        name: "OrientSpindle",
        doc: "M19: Orient Spindle",
        head: Head::Key("M19"),
        exec_order: 90,
        ..BASE
    },
    CommandKind {
        name: "SpindleConstantSurfaceSpeedMode",
        doc: "G96: Spindle Constant Surface Speed",
        head: Head::Key("G96"),
        params: "DS",
        modal_group: Some(modal_group::SPINDLE_SPEED_MODE),
        exec_order: 90,
        ..BASE
    },
    CommandKind {
        name: "SpindleRpmMode",
        doc: "G97: Spindle RPM Speed",
        head: Head::Key("G97"),
        params: "D",
        modal_group: Some(modal_group::SPINDLE_SPEED_MODE),
        exec_order: 90,
        ..BASE
    },
    // ======================= Coolant =======================
    CommandKind {
        name: "CoolantMistOn",
        doc: "M7: turn mist coolant on",
        head: Head::Key("M7"),
        modal_group: Some(modal_group::COOLANT),
        exec_order: 110,
        ..BASE
    },
    CommandKind {
        name: "CoolantFloodOn",
        doc: "M8: turn flood coolant on",
        head: Head::Key("M8"),
        modal_group: Some(modal_group::COOLANT),
        exec_order: 110,
        ..BASE
    },
    CommandKind {
        name: "CoolantOff",
        doc: "M9: turn all coolant off",
        head: Head::Key("M9"),
        modal_group: Some(modal_group::COOLANT),
        exec_order: 110,
        ..BASE
    },
    // ======================= Tool Length =======================
    CommandKind {
        name: "ToolLengthOffset",
        doc: "G43: Tool Length Offset",
        head: Head::Key("G43"),
        params: "H",
        modal_group: Some(modal_group::TOOL_LENGTH_OFFSET),
        exec_order: 180,
        ..BASE
    },
    CommandKind {
        name: "DynamicToolLengthOffset",
        doc: "G43.1: Dynamic Tool Length Offset",
        head: Head::Key("G43.1"),
        modal_group: Some(modal_group::TOOL_LENGTH_OFFSET),
        exec_order: 180,
        ..BASE
    },
    CommandKind {
        name: "AddToolLengthOffset",
        doc: "G43.2: Apply Additional Tool Length Offset",
        head: Head::Key("G43.2"),
        params: "H",
        modal_group: Some(modal_group::TOOL_LENGTH_OFFSET),
        exec_order: 180,
        ..BASE
    },
    CommandKind {
        name: "CancelToolLengthOffset",
        doc: "G49: Cancel Tool Length Compensation",
        head: Head::Key("G49"),
        modal_group: Some(modal_group::TOOL_LENGTH_OFFSET),
        exec_order: 180,
        ..BASE
    },
    // ======================= Stopping (Program Control) =======================
    CommandKind {
        name: "PauseProgram",
        doc: "M0: Program Pause",
        head: Head::Key("M0"),
        modal_group: Some(modal_group::STOPPING),
        exec_order: 250,
        ..BASE
    },
    CommandKind {
        name: "PauseProgramOptional",
        doc: "M1: Program Pause (optional)",
        head: Head::Key("M1"),
        modal_group: Some(modal_group::STOPPING),
        exec_order: 250,
        ..BASE
    },
    CommandKind {
        name: "EndProgram",
        doc: "M2: Program End",
        head: Head::Key("M2"),
        modal_group: Some(modal_group::STOPPING),
        exec_order: 250,
        ..BASE
    },
    CommandKind {
        name: "EndProgramPalletShuttle",
        doc: "M30: exchange pallet shuttles and end the program",
        head: Head::Key("M30"),
        modal_group: Some(modal_group::STOPPING),
        exec_order: 250,
        ..BASE
    },
    CommandKind {
        name: "PalletChangePause",
        doc: "M60: Pallet Change Pause",
        head: Head::Key("M60"),
        modal_group: Some(modal_group::STOPPING),
        exec_order: 250,
        ..BASE
    },
    // ======================= Units =======================
    CommandKind {
        name: "UseInches",
        doc: "G20: use inches for length units",
        head: Head::Key("G20"),
        modal_group: Some(modal_group::UNITS),
        exec_order: 160,
        effect: Effect::SetUnits { unit: Unit::Inches },
        ..BASE
    },
    CommandKind {
        name: "UseMillimeters",
        doc: "G21: use millimeters for length units",
        head: Head::Key("G21"),
        modal_group: Some(modal_group::UNITS),
        exec_order: 160,
        effect: Effect::SetUnits {
            unit: Unit::Millimeters,
        },
        ..BASE
    },
    // ======================= Plane Selection =======================
    //   (affects G2, G3, G81-G89, G40-G42)
    CommandKind {
        name: "SelectXYPlane",
        doc: "G17: select XY plane (default)",
        head: Head::Key("G17"),
        modal_group: Some(modal_group::PLANE_SELECTION),
        exec_order: 150,
        effect: Effect::SelectPlane {
            normal_axis: Some('Z'),
        },
        ..BASE
    },
    CommandKind {
        name: "SelectZXPlane",
        doc: "G18: select ZX plane",
        head: Head::Key("G18"),
        modal_group: Some(modal_group::PLANE_SELECTION),
        exec_order: 150,
        effect: Effect::SelectPlane {
            normal_axis: Some('Y'),
        },
        ..BASE
    },
    CommandKind {
        name: "SelectYZPlane",
        doc: "G19: select YZ plane",
        head: Head::Key("G19"),
        modal_group: Some(modal_group::PLANE_SELECTION),
        exec_order: 150,
        effect: Effect::SelectPlane {
            normal_axis: Some('X'),
        },
        ..BASE
    },
    CommandKind {
        name: "SelectUVPlane",
        doc: "G17.1: select UV plane",
        head: Head::Key("G17.1"),
        modal_group: Some(modal_group::PLANE_SELECTION),
        exec_order: 150,
        effect: Effect::SelectPlane { normal_axis: None },
        ..BASE
    },
    CommandKind {
        name: "SelectWUPlane",
        doc: "G18.1: select WU plane",
        head: Head::Key("G18.1"),
        modal_group: Some(modal_group::PLANE_SELECTION),
        exec_order: 150,
        effect: Effect::SelectPlane { normal_axis: None },
        ..BASE
    },
    CommandKind {
        name: "SelectVWPlane",
        doc: "G19.1: select VW plane",
        head: Head::Key("G19.1"),
        modal_group: Some(modal_group::PLANE_SELECTION),
        exec_order: 150,
        effect: Effect::SelectPlane { normal_axis: None },
        ..BASE
    },
    // ======================= Cutter Radius Compensation =======================
    CommandKind {
        name: "CutterRadiusCompOff",
        doc: "G40: Cutter Radius Compensation Off",
        head: Head::Key("G40"),
        modal_group: Some(modal_group::CUTTER_DIAMETER_COMP),
        exec_order: 170,
        ..BASE
    },
    CommandKind {
        name: "CutterCompLeft",
        doc: "G41: Cutter Radius Compensation (left)",
        head: Head::Key("G41"),
        params: "D",
        modal_group: Some(modal_group::CUTTER_DIAMETER_COMP),
        exec_order: 170,
        ..BASE
    },
    CommandKind {
        name: "CutterCompRight",
        doc: "G42: Cutter Radius Compensation (right)",
        head: Head::Key("G42"),
        params: "D",
        modal_group: Some(modal_group::CUTTER_DIAMETER_COMP),
        exec_order: 170,
        ..BASE
    },
    CommandKind {
        name: "DynamicCutterCompLeft",
        doc: "G41.1: Dynamic Cutter Radius Compensation (left)",
        head: Head::Key("G41.1"),
        params: "DL",
        modal_group: Some(modal_group::CUTTER_DIAMETER_COMP),
        exec_order: 170,
        ..BASE
    },
    CommandKind {
        name: "DynamicCutterCompRight",
        doc: "G42.1: Dynamic Cutter Radius Compensation (right)",
        head: Head::Key("G42.1"),
        params: "DL",
        modal_group: Some(modal_group::CUTTER_DIAMETER_COMP),
        exec_order: 170,
        ..BASE
    },
    // ======================= Path Control Mode =======================
    CommandKind {
        name: "ExactPathMode",
        doc: "G61: Exact path mode",
        head: Head::Key("G61"),
        modal_group: Some(modal_group::CONTROL_MODE),
        exec_order: 200,
        ..BASE
    },
    CommandKind {
        name: "ExactStopMode",
        doc: "G61.1: Exact stop mode",
        head: Head::Key("G61.1"),
        modal_group: Some(modal_group::CONTROL_MODE),
        exec_order: 200,
        ..BASE
    },
    CommandKind {
        name: "PathBlendingMode",
        doc: "G64: Path Blending",
        head: Head::Key("G64"),
        params: "PQ",
        modal_group: Some(modal_group::CONTROL_MODE),
        exec_order: 200,
        ..BASE
    },
    // ======================= Canned Cycle Return Mode =======================
    CommandKind {
        name: "CannedCycleReturnPrevLevel",
        doc: "G98: Canned Cycle Return to the level set prior to cycle start",
        head: Head::Key("G98"),
        modal_group: Some(modal_group::CANNED_CYCLES_RETURN),
        exec_order: 220,
        effect: Effect::CannedReturnMode { to_r: false },
        ..BASE
    },
    CommandKind {
        name: "CannedCycleReturnToR",
        doc: "G99: Canned Cycle Return to the level set by R",
        head: Head::Key("G99"),
        modal_group: Some(modal_group::CANNED_CYCLES_RETURN),
        exec_order: 220,
        effect: Effect::CannedReturnMode { to_r: true },
        ..BASE
    },
    // ======================= Other Modal Codes =======================
    CommandKind {
        name: "FeedRate",
        doc: "F: Set Feed Rate",
        head: Head::Match(is_feed_rate),
        modal_group: Some(modal_group::FEED_RATE),
        exec_order: 40,
        ..BASE
    },
    CommandKind {
        name: "SpindleSpeed",
        doc: "S: Set Spindle Speed",
        head: Head::Match(is_spindle_speed),
        modal_group: Some(modal_group::SPINDLE_SPEED),
        exec_order: 50,
        ..BASE
    },
    CommandKind {
        name: "SelectTool",
        doc: "T: Select Tool",
        head: Head::Match(is_tool_select),
        modal_group: Some(modal_group::TOOL),
        exec_order: 60,
        ..BASE
    },
    CommandKind {
        name: "SpeedAndFeedOverrideOn",
        doc: "M48: Speed and Feed Override Control On",
        head: Head::Key("M48"),
        modal_group: Some(modal_group::OVERRIDE_SWITCHES),
        exec_order: 120,
        ..BASE
    },
    CommandKind {
        name: "SpeedAndFeedOverrideOff",
        doc: "M49: Speed and Feed Override Control Off",
        head: Head::Key("M49"),
        modal_group: Some(modal_group::OVERRIDE_SWITCHES),
        exec_order: 120,
        ..BASE
    },
    CommandKind {
        name: "FeedOverride",
        doc: "M50: Feed Override Control",
        head: Head::Key("M50"),
        params: "P",
        exec_order: 120,
        ..BASE
    },
    CommandKind {
        name: "SpindleSpeedOverride",
        doc: "M51: Spindle Speed Override Control",
        head: Head::Key("M51"),
        params: "P",
        exec_order: 120,
        ..BASE
    },
    CommandKind {
        name: "AdaptiveFeed",
        doc: "M52: Adaptive Feed Control",
        head: Head::Key("M52"),
        params: "P",
        exec_order: 120,
        ..BASE
    },
    CommandKind {
        name: "FeedStop",
        doc: "M53: Feed Stop Control",
        head: Head::Key("M53"),
        params: "P",
        exec_order: 120,
        ..BASE
    },
    CommandKind {
        name: "SelectCoordinateSystem1",
        doc: "G54: Select Coordinate System 1",
        head: Head::Key("G54"),
        modal_group: Some(modal_group::COORDINATE_SYSTEM),
        exec_order: 190,
        effect: Effect::SelectCoordSystem { id: 1 },
        ..BASE
    },
    CommandKind {
        name: "SelectCoordinateSystem2",
        doc: "G55: Select Coordinate System 2",
        head: Head::Key("G55"),
        modal_group: Some(modal_group::COORDINATE_SYSTEM),
        exec_order: 190,
        effect: Effect::SelectCoordSystem { id: 2 },
        ..BASE
    },
    CommandKind {
        name: "SelectCoordinateSystem3",
        doc: "G56: Select Coordinate System 3",
        head: Head::Key("G56"),
        modal_group: Some(modal_group::COORDINATE_SYSTEM),
        exec_order: 190,
        effect: Effect::SelectCoordSystem { id: 3 },
        ..BASE
    },
    CommandKind {
        name: "SelectCoordinateSystem4",
        doc: "G57: Select Coordinate System 4",
        head: Head::Key("G57"),
        modal_group: Some(modal_group::COORDINATE_SYSTEM),
        exec_order: 190,
        effect: Effect::SelectCoordSystem { id: 4 },
        ..BASE
    },
    CommandKind {
        name: "SelectCoordinateSystem5",
        doc: "G58: Select Coordinate System 5",
        head: Head::Key("G58"),
        modal_group: Some(modal_group::COORDINATE_SYSTEM),
        exec_order: 190,
        effect: Effect::SelectCoordSystem { id: 5 },
        ..BASE
    },
    CommandKind {
        name: "SelectCoordinateSystem6",
        doc: "G59: Select Coordinate System 6",
        head: Head::Key("G59"),
        modal_group: Some(modal_group::COORDINATE_SYSTEM),
        exec_order: 190,
        effect: Effect::SelectCoordSystem { id: 6 },
        ..BASE
    },
    CommandKind {
        name: "SelectCoordinateSystem7",
        doc: "G59.1: Select Coordinate System 7",
        head: Head::Key("G59.1"),
        modal_group: Some(modal_group::COORDINATE_SYSTEM),
        exec_order: 190,
        effect: Effect::SelectCoordSystem { id: 7 },
        ..BASE
    },
    CommandKind {
        name: "SelectCoordinateSystem8",
        doc: "G59.2: Select Coordinate System 8",
        head: Head::Key("G59.2"),
        modal_group: Some(modal_group::COORDINATE_SYSTEM),
        exec_order: 190,
        effect: Effect::SelectCoordSystem { id: 8 },
        ..BASE
    },
    CommandKind {
        name: "SelectCoordinateSystem9",
        doc: "G59.3: Select Coordinate System 9",
        head: Head::Key("G59.3"),
        modal_group: Some(modal_group::COORDINATE_SYSTEM),
        exec_order: 190,
        effect: Effect::SelectCoordSystem { id: 9 },
        ..BASE
    },
    // ======================= Input/Output =======================
    CommandKind {
        name: "DigitalOutputOnSyncd",
        doc: "M62: turn on digital output synchronized with motion",
        head: Head::Key("M62"),
        params: "P",
        exec_order: 70,
        ..BASE
    },
    CommandKind {
        name: "DigitalOutputOffSyncd",
        doc: "M63: turn off digital output synchronized with motion",
        head: Head::Key("M63"),
        params: "P",
        exec_order: 70,
        ..BASE
    },
    CommandKind {
        name: "DigitalOutputOn",
        doc: "M64: turn on digital output immediately",
        head: Head::Key("M64"),
        params: "P",
        exec_order: 70,
        ..BASE
    },
    CommandKind {
        name: "DigitalOutputOff",
        doc: "M65: turn off digital output immediately",
        head: Head::Key("M65"),
        params: "P",
        exec_order: 70,
        ..BASE
    },
    CommandKind {
        name: "WaitOnInput",
        doc: "M66: Wait on Input",
        head: Head::Key("M66"),
        params: "PELQ",
        exec_order: 70,
        ..BASE
    },
    CommandKind {
        name: "AnalogOutputSyncd",
        doc: "M67: Analog Output, Synchronized",
        head: Head::Key("M67"),
        params: "T",
        exec_order: 70,
        ..BASE
    },
    CommandKind {
        name: "AnalogOutputImmediate",
        doc: "M68: Analog Output, Immediate",
        head: Head::Key("M68"),
        params: "T",
        exec_order: 70,
        ..BASE
    },
    // ======================= Non-modal Codes =======================
    CommandKind {
        name: "ToolChange",
        doc: "M6: Tool Change",
        head: Head::Key("M6"),
        params: "T",
        exec_order: 80,
        ..BASE
    },
    CommandKind {
        name: "ToolSetCurrent",
        doc: "M61: Set Current Tool",
        head: Head::Key("M61"),
        params: "Q",
        exec_order: 80,
        ..BASE
    },
    CommandKind {
        name: "Set",
        doc: "G10: set tool table or coordinate-system data",
        head: Head::Key("G10"),
        params: "LPQRABCXYZ",
        exec_order: 230,
        ..BASE
    },
    CommandKind {
        name: "GotoPredefinedPosition",
        doc: "G28,G30: Goto Predefined Position (rapid movement)",
        head: Head::Match(is_goto_predefined),
        exec_order: 230,
        ..BASE
    },
    CommandKind {
        name: "SetPredefinedPosition",
        doc: "G28.1,G30.1: Set Predefined Position",
        head: Head::Match(is_set_predefined),
        exec_order: 230,
        ..BASE
    },
    CommandKind {
        name: "MoveInMachineCoords",
        doc: "G53: Move in Machine Coordinates",
        head: Head::Key("G53"),
        exec_order: 240,
        ..BASE
    },
    CommandKind {
        name: "CoordSystemOffset",
        doc: "G92: Coordinate System Offset",
        head: Head::Key("G92"),
        params: MOTION,
        exec_order: 230,
        effect: Effect::SetOffset,
        ..BASE
    },
    CommandKind {
        name: "ResetCoordSystemOffset",
        doc: "G92.1,G92.2: Reset Coordinate System Offset",
        head: Head::Match(is_reset_coord_offset),
        exec_order: 230,
        effect: Effect::ClearOffset,
        ..BASE
    },
    CommandKind {
        name: "RestoreCoordSystemOffset",
        doc: "G92.3: Restore Coordinate System Offset",
        head: Head::Key("G92.3"),
        exec_order: 230,
        effect: Effect::RestoreOffset,
        ..BASE
    },
    CommandKind {
        name: "UserDefined",
        doc: "M101-M199: User Defined Commands",
        head: Head::Match(is_user_defined),
        params: "PQ",
        modal_group: Some(modal_group::USER_DEFINED),
        exec_order: 130,
        ..BASE
    },
];
