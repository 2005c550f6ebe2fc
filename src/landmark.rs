/// A single 3D hand keypoint, in the MediaPipe hand topology: index 0 is the
/// wrist, and each finger contributes four joints (MCP, PIP/IP, DIP, TIP) in
/// thumb-to-pinky order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    fn sub(self, other: Landmark) -> Landmark {
        Landmark::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    fn dot(self, other: Landmark) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn norm(self) -> f32 {
        self.dot(self).sqrt()
    }

    fn distance(self, other: Landmark) -> f32 {
        self.sub(other).norm()
    }
}

pub const NUM_LANDMARKS: usize = 21;
pub const NUM_FEATURES: usize = 48;

const FINGERTIPS: [usize; 5] = [4, 8, 12, 16, 20];
const MCPS: [usize; 5] = [1, 5, 9, 13, 17];
const PALM_JOINTS: [usize; 4] = [5, 9, 13, 17];

/// Converts 21 raw landmarks into 48 pose-invariant scalar features, in the
/// fixed order the quantizer's range table below is indexed by.
pub fn extract_features(landmarks: &[Landmark; NUM_LANDMARKS]) -> [f32; NUM_FEATURES] {
    let wrist = landmarks[0];
    let middle_mcp = landmarks[9];
    let hand_size = wrist.distance(middle_mcp);

    if hand_size < 1e-6 {
        return [0.0; NUM_FEATURES];
    }

    let palm_center = mean(landmarks, &PALM_JOINTS);
    let tips: [Landmark; 5] = FINGERTIPS.map(|i| landmarks[i]);

    let mut f = [0.0f32; NUM_FEATURES];

    // 0-4: fingertip distance from wrist.
    for (k, tip) in tips.iter().enumerate() {
        f[k] = tip.distance(wrist) / hand_size;
    }

    // 5-9: fingertip distance from palm center.
    for (k, tip) in tips.iter().enumerate() {
        f[5 + k] = tip.distance(palm_center) / hand_size;
    }

    // 10-14: upward-positive relative height.
    for (k, tip) in tips.iter().enumerate() {
        f[10 + k] = (wrist.y - tip.y) / hand_size;
    }

    // 15-19: lateral spread relative to palm center.
    for (k, tip) in tips.iter().enumerate() {
        f[15 + k] = (tip.x - palm_center.x) / hand_size;
    }

    // 20-24: curl angle at each finger's PIP/IP joint, normalized to [0, 1].
    for k in 0..5 {
        let mcp = landmarks[MCPS[k]];
        let pip = landmarks[MCPS[k] + 1];
        let tip = tips[k];
        f[20 + k] = curl_angle(mcp, pip, tip) / std::f32::consts::PI;
    }

    // 25-34: pairwise inter-fingertip distances, i<j.
    let mut idx = 25;
    for i in 0..5 {
        for j in (i + 1)..5 {
            f[idx] = tips[i].distance(tips[j]) / hand_size;
            idx += 1;
        }
    }

    // 35-38: thumb tip to each non-thumb fingertip, index->pinky order.
    for (k, tip) in tips.iter().enumerate().skip(1) {
        f[34 + k] = tips[0].distance(*tip) / hand_size;
    }

    // 39-43: relative depth.
    for (k, tip) in tips.iter().enumerate() {
        f[39 + k] = (tip.z - wrist.z) / hand_size;
    }

    // 44-47: adjacent MCP distances, (1,5),(5,9),(9,13),(13,17).
    for k in 0..4 {
        f[44 + k] = landmarks[MCPS[k]].distance(landmarks[MCPS[k + 1]]) / hand_size;
    }

    f
}

fn mean(landmarks: &[Landmark; NUM_LANDMARKS], indices: &[usize]) -> Landmark {
    let mut acc = Landmark::new(0.0, 0.0, 0.0);
    for &i in indices {
        acc.x += landmarks[i].x;
        acc.y += landmarks[i].y;
        acc.z += landmarks[i].z;
    }
    let n = indices.len() as f32;
    Landmark::new(acc.x / n, acc.y / n, acc.z / n)
}

fn curl_angle(mcp: Landmark, pip: Landmark, tip: Landmark) -> f32 {
    let a = mcp.sub(pip);
    let b = tip.sub(pip);
    let (mag_a, mag_b) = (a.norm(), b.norm());
    if mag_a < 1e-8 || mag_b < 1e-8 {
        return 0.0;
    }
    (a.dot(b) / (mag_a * mag_b)).clamp(-1.0, 1.0).acos()
}
