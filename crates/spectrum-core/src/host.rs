// File: crates/spectrum-core/src/host.rs
// Summary: Host environment binding: resolves containers to mount points and attaches surfaces.

use std::collections::HashMap;

use crate::error::{PlotError, PlotResult};
use crate::types::SurfaceSize;

/// Opaque handle to a mount point owned by a [`Host`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MountId(pub usize);

/// Where a widget should be mounted: by identifier, or by a handle already in hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Container {
    Id(String),
    Mount(MountId),
}

impl From<&str> for Container {
    fn from(id: &str) -> Self { Container::Id(id.to_string()) }
}

impl From<String> for Container {
    fn from(id: String) -> Self { Container::Id(id) }
}

impl From<MountId> for Container {
    fn from(m: MountId) -> Self { Container::Mount(m) }
}

pub trait Host {
    /// Mount point registered under `id`.
    fn lookup(&self, id: &str) -> Option<MountId>;

    /// Whether `mount` is a live mount point of this host.
    fn contains(&self, mount: MountId) -> bool;

    /// Attach a drawing surface of `size` to `mount`.
    fn attach(&mut self, mount: MountId, size: SurfaceSize) -> PlotResult<()>;

    fn resolve(&self, container: &Container) -> Option<MountId> {
        match container {
            Container::Id(id) => self.lookup(id),
            Container::Mount(m) => self.contains(*m).then_some(*m),
        }
    }
}

#[derive(Debug, Default)]
struct MountPoint {
    id: String,
    surfaces: Vec<SurfaceSize>,
}

/// In-process host: named mount points that record the surfaces attached to them.
#[derive(Debug, Default)]
pub struct MemoryHost {
    mounts: Vec<MountPoint>,
    by_id: HashMap<String, MountId>,
}

impl MemoryHost {
    pub fn new() -> Self { Self::default() }

    /// Register a mount point; registering an existing id returns its handle.
    pub fn register(&mut self, id: impl Into<String>) -> MountId {
        let id = id.into();
        if let Some(m) = self.by_id.get(&id) {
            return *m;
        }
        let m = MountId(self.mounts.len());
        self.by_id.insert(id.clone(), m);
        self.mounts.push(MountPoint { id, surfaces: Vec::new() });
        m
    }

    /// Surfaces attached to `mount`, in attach order.
    pub fn surfaces(&self, mount: MountId) -> &[SurfaceSize] {
        self.mounts.get(mount.0).map(|m| m.surfaces.as_slice()).unwrap_or(&[])
    }

    pub fn mount_id(&self, mount: MountId) -> Option<&str> {
        self.mounts.get(mount.0).map(|m| m.id.as_str())
    }
}

impl Host for MemoryHost {
    fn lookup(&self, id: &str) -> Option<MountId> {
        self.by_id.get(id).copied()
    }

    fn contains(&self, mount: MountId) -> bool {
        mount.0 < self.mounts.len()
    }

    fn attach(&mut self, mount: MountId, size: SurfaceSize) -> PlotResult<()> {
        let point = self
            .mounts
            .get_mut(mount.0)
            .ok_or_else(|| PlotError::Attach(format!("unknown mount {}", mount.0)))?;
        point.surfaces.push(size);
        Ok(())
    }
}
