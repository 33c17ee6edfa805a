//! Rickard (1972) fault classification.
//!
//! Maps a fault-plane orientation, given as a dip and a pitch/rake angle,
//! onto the Rickard classification diagram and names the resulting fault
//! style. The diagram divides a full turn into 22 equal angular sectors,
//! each associated with a named fault-slip style; the dip/pitch pair
//! projects to a point in the plane and the sector containing that point
//! decides the name.
//!
//! ```
//! use rickard::{classify_fault, Convention};
//!
//! let result = classify_fault(30.0, 60.0, Convention::Rickard);
//! assert_eq!(result.sector, 4);
//! assert_eq!(result.fault_name, "Thrust Right Slip Fault");
//! ```

pub mod glyphs;
pub mod plot;
pub mod projection;
pub mod sector;

pub use plot::{render_diagram, save_diagram_png, DiagramError, DiagramOptions};
pub use projection::{boundary_radius, project, Convention, DiamondPoint, KITE_EXAGGERATION};
pub use sector::{
    classify, classify_fault, fault_name, sector_of_angle, Classification, FAULT_NAMES,
    SECTOR_COUNT, UNKNOWN_FAULT,
};
