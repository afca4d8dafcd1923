use glamx::{Mat4, Pose3, Vec3};
use kiss3d::camera::Camera3d;
use kiss3d::event::WindowEvent;
use kiss3d::window::Canvas;

/// A third-person camera that trails a target at a fixed offset.
///
/// The camera ignores mouse and keyboard input: the game moves it by calling
/// [`FollowCamera3d::follow`] once per frame with the player's position.
///
/// # Example
/// ```no_run
/// # use wildlands::camera::FollowCamera3d;
/// # use glamx::Vec3;
/// let mut camera = FollowCamera3d::new(Vec3::new(0.0, 8.0, 15.0));
/// camera.follow(Vec3::new(3.0, 1.0, -2.0));
/// assert_eq!(camera.at(), Vec3::new(3.0, 1.0, -2.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FollowCamera3d {
    offset: Vec3,
    at: Vec3,
    fov: f32,
    znear: f32,
    zfar: f32,
    proj: Mat4,
    view: Mat4,
    proj_view: Mat4,
    inverse_proj_view: Mat4,
    last_framebuffer_size: (f32, f32),
}

impl FollowCamera3d {
    /// Creates a camera looking at the origin from `offset`.
    ///
    /// Default frustum: 75° vertical field of view, near plane at 0.1, far plane at 2000.
    pub fn new(offset: Vec3) -> FollowCamera3d {
        FollowCamera3d::new_with_frustum(75.0f32.to_radians(), 0.1, 2000.0, offset)
    }

    /// Creates a camera with custom frustum parameters.
    pub fn new_with_frustum(fov: f32, znear: f32, zfar: f32, offset: Vec3) -> FollowCamera3d {
        let mut res = FollowCamera3d {
            offset,
            at: Vec3::ZERO,
            fov,
            znear,
            zfar,
            proj: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            proj_view: Mat4::IDENTITY,
            inverse_proj_view: Mat4::IDENTITY,
            last_framebuffer_size: (800.0, 600.0),
        };
        res.update_projviews();
        res
    }

    /// Moves the camera so that it looks at `target` from the configured offset.
    pub fn follow(&mut self, target: Vec3) {
        self.at = target;
        self.update_projviews();
    }

    /// The point the camera looks at.
    #[inline]
    pub fn at(&self) -> Vec3 {
        self.at
    }

    /// The offset from the target to the eye.
    #[inline]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Width over height of the last known framebuffer.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.last_framebuffer_size.0 / self.last_framebuffer_size.1
    }

    fn update_projviews(&mut self) {
        self.view = self.view_transform().to_mat4();
        self.proj = Mat4::perspective_rh_gl(self.fov, self.aspect(), self.znear, self.zfar);
        self.proj_view = self.proj * self.view;
        self.inverse_proj_view = self.proj_view.inverse();
    }
}

impl Camera3d for FollowCamera3d {
    fn clip_planes(&self) -> (f32, f32) {
        (self.znear, self.zfar)
    }

    fn view_transform(&self) -> Pose3 {
        Pose3::look_at_rh(self.eye(), self.at, Vec3::Y)
    }

    fn eye(&self) -> Vec3 {
        self.at + self.offset
    }

    fn handle_event(&mut self, _: &Canvas, event: &WindowEvent) {
        if let WindowEvent::FramebufferSize(w, h) = *event {
            if w > 0 && h > 0 {
                self.last_framebuffer_size = (w as f32, h as f32);
                self.update_projviews();
            }
        }
    }

    #[inline]
    fn view_transform_pair(&self, _pass: usize) -> (Pose3, Mat4) {
        (self.view_transform(), self.proj)
    }

    fn transformation(&self) -> Mat4 {
        self.proj_view
    }

    fn inverse_transformation(&self) -> Mat4 {
        self.inverse_proj_view
    }

    fn update(&mut self, _: &Canvas) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use glamx::Vec2;

    #[test]
    fn eye_trails_the_target() {
        let mut camera = FollowCamera3d::new(Vec3::new(0.0, 8.0, 15.0));
        camera.follow(Vec3::new(5.0, 1.0, -3.0));
        assert_eq!(camera.eye(), Vec3::new(5.0, 9.0, 12.0));
        assert_eq!(camera.at(), Vec3::new(5.0, 1.0, -3.0));
    }

    #[test]
    fn target_projects_to_screen_center() {
        let mut camera = FollowCamera3d::new(Vec3::new(0.0, 8.0, 15.0));
        camera.follow(Vec3::new(-20.0, 1.0, 40.0));

        let size = Vec2::new(800.0, 600.0);
        let center = camera.project(camera.at(), size);
        assert!((center - size / 2.0).length() < 1.0e-2);
    }

    #[test]
    fn clip_planes_match_the_demo() {
        let camera = FollowCamera3d::new(Vec3::new(0.0, 8.0, 15.0));
        assert_eq!(camera.clip_planes(), (0.1, 2000.0));
    }
}
