//! Demonstration domain: a fleet of GPUs
//!
//! Thin glue used by the CLI demo and the scenario tests. The framework
//! itself is type-parametric; this module only supplies an element type
//! with the accessors predicates need (kind, body color, working flag) and
//! a per-kind "use" behavior dispatched through a [`Workload`] strategy.
//!
//! Attribute generation is randomized but always flows through a
//! caller-supplied RNG, so demo runs and tests can seed it explicitly and
//! stay deterministic.

use std::collections::LinkedList;
use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::container::BoundedSeq;

#[cfg(feature = "visualize")]
use serde::{Deserialize, Serialize};

/// Product line of a GPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(Serialize, Deserialize))]
pub enum GpuKind {
    /// Consumer gaming card.
    GeForce,
    /// Workstation rendering card.
    Quadro,
    /// Datacenter compute card.
    Tesla,
}

impl GpuKind {
    /// Strategy object implementing this kind's "use" behavior.
    pub fn workload(&self) -> &'static dyn Workload {
        match self {
            GpuKind::GeForce => &Gaming,
            GpuKind::Quadro => &Rendering,
            GpuKind::Tesla => &Training,
        }
    }

    fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..3) {
            0 => GpuKind::GeForce,
            1 => GpuKind::Quadro,
            _ => GpuKind::Tesla,
        }
    }
}

impl fmt::Display for GpuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GpuKind::GeForce => "GeForce",
            GpuKind::Quadro => "Quadro",
            GpuKind::Tesla => "Tesla",
        };
        f.write_str(name)
    }
}

/// Body color of a GPU shroud.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(Serialize, Deserialize))]
pub enum BodyColor {
    /// Black shroud.
    Black,
    /// White shroud.
    White,
    /// Silver shroud.
    Silver,
    /// Unmarked or custom shroud.
    Unknown,
}

impl BodyColor {
    fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..4) {
            0 => BodyColor::Black,
            1 => BodyColor::White,
            2 => BodyColor::Silver,
            _ => BodyColor::Unknown,
        }
    }
}

impl fmt::Display for BodyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BodyColor::Black => "Black",
            BodyColor::White => "White",
            BodyColor::Silver => "Silver",
            BodyColor::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// One processing unit in the demonstration fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(Serialize, Deserialize))]
pub struct Gpu {
    kind: GpuKind,
    color: BodyColor,
    memory_gb: u32,
    working: bool,
}

impl Gpu {
    /// Build a unit with explicit attributes.
    pub fn new(kind: GpuKind, color: BodyColor, memory_gb: u32, working: bool) -> Self {
        Self {
            kind,
            color,
            memory_gb,
            working,
        }
    }

    /// Build a unit with randomized attributes: kind and color uniform,
    /// memory in 4..=19 GB, working flag a coin flip.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            kind: GpuKind::random(rng),
            color: BodyColor::random(rng),
            memory_gb: rng.gen_range(4..20),
            working: rng.gen_bool(0.5),
        }
    }

    /// Product line of this unit.
    pub fn kind(&self) -> GpuKind {
        self.kind
    }

    /// Shroud color of this unit.
    pub fn color(&self) -> BodyColor {
        self.color
    }

    /// Installed memory in gigabytes.
    pub fn memory_gb(&self) -> u32 {
        self.memory_gb
    }

    /// Whether the unit powers on.
    pub fn is_working(&self) -> bool {
        self.working
    }

    /// Run this unit's kind-specific workload, returning the report line.
    pub fn activate(&self) -> String {
        self.kind.workload().run(self)
    }
}

/// Kind-specific "use" behavior for a [`Gpu`].
pub trait Workload {
    /// Exercise `gpu`, reporting what happened.
    fn run(&self, gpu: &Gpu) -> String;
}

/// Gaming workload (GeForce).
#[derive(Debug)]
pub struct Gaming;

impl Workload for Gaming {
    fn run(&self, gpu: &Gpu) -> String {
        if gpu.is_working() {
            "Using WORKING GPU... Gaming with GeForce!".to_string()
        } else {
            "GeForce is broken, can't use it.".to_string()
        }
    }
}

/// Rendering workload (Quadro).
#[derive(Debug)]
pub struct Rendering;

impl Workload for Rendering {
    fn run(&self, gpu: &Gpu) -> String {
        if gpu.is_working() {
            "Using WORKING GPU... Rendering with Quadro!".to_string()
        } else {
            "Quadro is broken, can't use it.".to_string()
        }
    }
}

/// AI training workload (Tesla).
#[derive(Debug)]
pub struct Training;

impl Workload for Training {
    fn run(&self, gpu: &Gpu) -> String {
        if gpu.is_working() {
            "Using WORKING GPU... Training AI on Tesla!".to_string()
        } else {
            "Tesla is broken, can't use it.".to_string()
        }
    }
}

/// Fill a fixed-capacity sequence with `count` random units.
///
/// # Panics
///
/// Panics if `count` exceeds `capacity` (the bounded sequence fails fast).
pub fn random_fleet(count: usize, capacity: usize, rng: &mut impl Rng) -> BoundedSeq<Gpu> {
    let mut fleet = BoundedSeq::new(capacity);
    for _ in 0..count {
        fleet.push(Gpu::random(rng));
    }
    debug!(count, capacity, "generated bounded fleet");
    fleet
}

/// Build a foreign linked list of `count` random units, for exercising the
/// adapter cursor.
pub fn random_list(count: usize, rng: &mut impl Rng) -> LinkedList<Gpu> {
    let mut list = LinkedList::new();
    for _ in 0..count {
        list.push_back(Gpu::random(rng));
    }
    debug!(count, "generated foreign list");
    list
}
