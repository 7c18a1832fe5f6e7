// Shared simulation/visual tuning constants used by the web frontend and tests.

// Bounding cube
pub const CUBE_EDGE: f32 = 400.0; // edge length of the cube centered at the origin
pub const CUBE_HALF_EDGE: f32 = CUBE_EDGE / 2.0;

// Point population
pub const MAX_PARTICLES: usize = 120;
pub const VIEWPORT_PX_PER_PARTICLE: f64 = 10.0; // one point per 10 CSS px of viewport width

// Motion
pub const VELOCITY_RANGE: f32 = 0.2; // per-axis speed is sampled in [-range, range]

// Connections
pub const CONNECT_DISTANCE: f32 = 100.0;
pub const LINE_COLOR_START: [f32; 3] = [1.0, 0.6, 0.0]; // bright orange
pub const LINE_COLOR_END: [f32; 3] = [1.0, 0.8, 0.0]; // orange leaning yellow
pub const LINE_OPACITY: f32 = 0.2; // kept low so page copy stays readable

// Points
pub const POINT_COLOR: [f32; 3] = [1.0, 182.0 / 255.0, 0.0]; // #FFB600
pub const POINT_OPACITY: f32 = 0.6;
pub const POINT_SIZE: f32 = 3.0; // world units, attenuated with depth

// Whole-cloud rotation per tick (radians)
pub const ROTATION_X_PER_TICK: f32 = 0.0005;
pub const ROTATION_Y_PER_TICK: f32 = 0.001;

// Camera
pub const CAMERA_Z: f32 = 100.0;
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 1.0;
pub const CAMERA_ZFAR: f32 = 1000.0;
