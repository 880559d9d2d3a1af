//! 基础类型定义
//!
//! 画布坐标等与算法无关的元数据类型

use serde::{Deserialize, Serialize};

/// 画布上的二维坐标
///
/// 仅作为顶点的元数据保存，所有算法都不读取坐标。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// 到另一点的欧氏距离
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// 到线段的最短距离
    ///
    /// 投影参数夹紧到 [0, 1]，线段退化为点时取点距。
    pub fn distance_to_segment(&self, start: &Point, end: &Point) -> f64 {
        let vx = (end.x - start.x) as f64;
        let vy = (end.y - start.y) as f64;
        let wx = (self.x - start.x) as f64;
        let wy = (self.y - start.y) as f64;

        let length_squared = vx * vx + vy * vy;
        if length_squared == 0.0 {
            return (wx * wx + wy * wy).sqrt();
        }

        let t = ((wx * vx + wy * vy) / length_squared).clamp(0.0, 1.0);
        let dx = self.x as f64 - (start.x as f64 + t * vx);
        let dy = self.y as f64 - (start.y as f64 + t * vy);
        (dx * dx + dy * dy).sqrt()
    }
}
