//! Names a [`Program`](super::Program) looks up after linking.
//!
//! Any of them may be missing from a given shader.

/// Vertex position attribute (`vec4`).
pub const POSITION: &str = "vs_Pos";
/// Vertex normal attribute (`vec4`).
pub const NORMAL: &str = "vs_Nor";
/// Vertex color attribute (`vec4`).
pub const COLOR: &str = "vs_Col";

/// Model matrix (`mat4`).
pub const MODEL: &str = "u_Model";
/// Inverse transpose of the model matrix (`mat4`).
pub const MODEL_INV_TR: &str = "u_ModelInvTr";
/// View-projection matrix (`mat4`).
pub const VIEW_PROJ: &str = "u_ViewProj";
/// Geometry color (`vec4`).
pub const GEOMETRY_COLOR: &str = "u_Color";
/// Elapsed time, in seconds (`float`).
pub const TIME: &str = "u_Time";
/// First cube color (`vec3`).
pub const COLOR1: &str = "u_Color1";
/// Second cube color (`vec3`).
pub const COLOR2: &str = "u_Color2";
/// Third cube color (`vec3`).
pub const COLOR3: &str = "u_Color3";
/// Screen width (`float`).
pub const WIDTH: &str = "u_Width";
/// Screen height (`float`).
pub const HEIGHT: &str = "u_Height";
/// Animation stage index (`int`).
pub const ANIMATION_STAGE: &str = "u_AnimationStage";
/// Screen rotation, in radians (`float`).
pub const SCREEN_ROT: &str = "u_ScreenRot";
