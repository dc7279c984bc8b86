use cgmath::{InnerSpace, Matrix3, Quaternion, Rotation, Vector3, vec3};

const EPSILON: f32 = 1.0e-6;

/// Local forward axis. Rotations in this workspace look down -Z.
pub const FORWARD: Vector3<f32> = vec3(0.0, 0.0, -1.0);
pub const UP: Vector3<f32> = vec3(0.0, 1.0, 0.0);

/// Normalize, or `None` for zero-length and non-finite vectors.
pub fn safe_normalize(v: Vector3<f32>) -> Option<Vector3<f32>> {
    let magnitude2 = v.magnitude2();
    if !magnitude2.is_finite() || magnitude2 < EPSILON * EPSILON {
        return None;
    }
    Some(v / magnitude2.sqrt())
}

/// Project onto the horizontal (XZ) plane.
pub fn horizontal(v: Vector3<f32>) -> Vector3<f32> {
    vec3(v.x, 0.0, v.z)
}

pub fn is_finite(v: Vector3<f32>) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

/// World-space forward direction of a rotation.
pub fn forward(rotation: Quaternion<f32>) -> Vector3<f32> {
    rotation.rotate_vector(FORWARD)
}

/// Rotation whose forward axis points along `direction`, keeping `up` as close to
/// vertical as possible (no roll). Returns identity for a zero direction.
pub fn look_rotation(direction: Vector3<f32>, up: Vector3<f32>) -> Quaternion<f32> {
    let Some(f) = safe_normalize(direction) else {
        return Quaternion::new(1.0, 0.0, 0.0, 0.0);
    };

    match safe_normalize(f.cross(up)) {
        Some(right) => {
            let true_up = right.cross(f);
            Quaternion::from(Matrix3::from_cols(right, true_up, -f))
        }
        // Looking straight along `up`: any yaw is valid.
        None => Quaternion::from_arc(FORWARD, f, Some(up)),
    }
}
