//! Headless presentation stage.
//!
//! Stands in for a scene graph: it stores marker transforms, runs the linear
//! tweens the core requests and reports simple scene statistics.

use glam::{Vec3, Vec4};
use soundhand::{Easing, VisualMarker};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: Vec3,
    to: Vec3,
    start: Duration,
    duration: Duration,
}

impl Tween {
    fn sample(&self, now: Duration) -> (Vec3, bool) {
        let elapsed = now.saturating_sub(self.start).as_secs_f32();
        let total = self.duration.as_secs_f32();
        if total <= 0.0 || elapsed >= total {
            return (self.to, true);
        }
        (self.from.lerp(self.to, elapsed / total), false)
    }
}

#[derive(Clone, Debug, Default)]
struct MarkerNode {
    app_offset: Vec3,
    local: Vec3,
    visible: bool,
    tint: Vec4,
    tween: Option<Tween>,
}

impl MarkerNode {
    fn world_position(&self) -> Vec3 {
        self.app_offset + self.local
    }
}

#[derive(Debug, Default)]
pub struct SceneStats {
    pub visible: usize,
    pub moving: usize,
    /// Visible markers tinted predominantly red vs green.
    pub red: usize,
    pub green: usize,
    pub centroid: Vec3,
}

#[derive(Default)]
pub struct Scene {
    nodes: Vec<MarkerNode>,
    now: Duration,
}

impl Scene {
    pub fn shared() -> Rc<RefCell<Scene>> {
        Rc::new(RefCell::new(Scene::default()))
    }

    /// Move scene time forward and step all running tweens.
    pub fn advance(&mut self, now: Duration) {
        self.now = now;
        for node in &mut self.nodes {
            if let Some(tween) = node.tween {
                let (pos, done) = tween.sample(now);
                node.local = pos;
                if done {
                    node.tween = None;
                }
            }
        }
    }

    pub fn stats(&self) -> SceneStats {
        let mut stats = SceneStats::default();
        let mut sum = Vec3::ZERO;
        for node in self.nodes.iter().filter(|n| n.visible) {
            stats.visible += 1;
            if node.tween.is_some() {
                stats.moving += 1;
            }
            if node.tint.x >= node.tint.y {
                stats.red += 1;
            } else {
                stats.green += 1;
            }
            sum += node.world_position();
        }
        if stats.visible > 0 {
            stats.centroid = sum / stats.visible as f32;
        }
        stats
    }

    fn add_node(&mut self) -> usize {
        self.nodes.push(MarkerNode {
            tint: Vec4::ONE,
            ..Default::default()
        });
        self.nodes.len() - 1
    }
}

/// Handle into one node of a shared [`Scene`].
pub struct StageMarker {
    index: usize,
    scene: Rc<RefCell<Scene>>,
}

impl StageMarker {
    pub fn new(scene: &Rc<RefCell<Scene>>) -> Self {
        let index = scene.borrow_mut().add_node();
        Self {
            index,
            scene: Rc::clone(scene),
        }
    }

    fn with_node(&self, f: impl FnOnce(&mut MarkerNode, Duration)) {
        let mut scene = self.scene.borrow_mut();
        let now = scene.now;
        if let Some(node) = scene.nodes.get_mut(self.index) {
            f(node, now);
        }
    }
}

impl VisualMarker for StageMarker {
    fn set_app_offset(&mut self, offset: Vec3) {
        self.with_node(|n, _| n.app_offset = offset);
    }

    fn set_local_position(&mut self, position: Vec3) {
        // A direct write wins over a tween still running from an earlier use.
        self.with_node(|n, _| {
            n.local = position;
            n.tween = None;
        });
    }

    fn set_visible(&mut self, visible: bool) {
        self.with_node(|n, _| n.visible = visible);
    }

    fn set_tint(&mut self, rgba: Vec4) {
        self.with_node(|n, _| n.tint = rgba);
    }

    fn animate_to(&mut self, target: Vec3, duration: Duration, easing: Easing) {
        match easing {
            Easing::Linear => self.with_node(|n, now| {
                n.tween = Some(Tween {
                    from: n.local,
                    to: target,
                    start: now,
                    duration,
                });
            }),
        }
    }
}
