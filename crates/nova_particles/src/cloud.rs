//! Particle cloud storage

use nova_core::Vec3;

/// One particle of a cloud, read out of the parallel buffers
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleRecord {
    pub position: Vec3,
    /// Relative point size (primary vs. secondary text)
    pub size_class: f32,
    /// Random value in `[0, 1)` used to desynchronize animation
    pub phase: f32,
}

/// A point cloud stored as three parallel buffers
///
/// Index `i` addresses the same particle in every buffer. The only way to
/// grow the cloud is [`push`](Self::push), which appends to all three.
#[derive(Clone, Debug, Default)]
pub struct ParticleCloud {
    positions: Vec<Vec3>,
    size_classes: Vec<f32>,
    phases: Vec<f32>,
}

impl ParticleCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            size_classes: Vec::with_capacity(capacity),
            phases: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, position: Vec3, size_class: f32, phase: f32) {
        self.positions.push(position);
        self.size_classes.push(size_class);
        self.phases.push(phase);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn size_classes(&self) -> &[f32] {
        &self.size_classes
    }

    pub fn phases(&self) -> &[f32] {
        &self.phases
    }

    pub fn get(&self, index: usize) -> Option<ParticleRecord> {
        Some(ParticleRecord {
            position: *self.positions.get(index)?,
            size_class: self.size_classes[index],
            phase: self.phases[index],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = ParticleRecord> + '_ {
        self.positions
            .iter()
            .zip(&self.size_classes)
            .zip(&self.phases)
            .map(|((&position, &size_class), &phase)| ParticleRecord {
                position,
                size_class,
                phase,
            })
    }

    /// Interleaved vertex records for upload
    pub fn vertices(&self) -> Vec<PointVertex> {
        self.iter().map(PointVertex::from).collect()
    }
}

/// GPU-friendly vertex for a cloud particle
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub size_class: f32,
    pub phase: f32,
}

impl From<ParticleRecord> for PointVertex {
    fn from(record: ParticleRecord) -> Self {
        Self {
            position: record.position.to_array(),
            size_class: record.size_class,
            phase: record.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_buffers_stay_aligned() {
        let mut cloud = ParticleCloud::with_capacity(2);
        cloud.push(Vec3::new(1.0, 2.0, 0.0), 1.0, 0.25);
        cloud.push(Vec3::new(-1.0, 0.0, 0.0), 0.45, 0.75);

        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.positions().len(), cloud.size_classes().len());
        assert_eq!(cloud.size_classes().len(), cloud.phases().len());

        let second = cloud.get(1).unwrap();
        assert_eq!(second.position, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(second.size_class, 0.45);
        assert_eq!(second.phase, 0.75);
        assert!(cloud.get(2).is_none());
    }

    #[test]
    fn test_vertices_cast_to_bytes() {
        let mut cloud = ParticleCloud::new();
        cloud.push(Vec3::new(1.0, 2.0, 3.0), 1.0, 0.5);
        let vertices = cloud.vertices();
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), std::mem::size_of::<PointVertex>());
        assert_eq!(std::mem::size_of::<PointVertex>(), 20);
        assert_eq!(vertices[0].position, [1.0, 2.0, 3.0]);
    }
}
