/// WGSL shader for flat-coloured geometry (ground and hand).
pub const SCENE_SHADER: &str = r#"
struct Uniforms {
    mvp: mat4x4<f32>,
    color: vec3<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return uniforms.mvp * vec4<f32>(position, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(uniforms.color, 1.0);
}
"#;

/// WGSL shader for the crosshair: a screen-centred square built from the
/// vertex index, no vertex buffer.
pub const CROSSHAIR_SHADER: &str = r#"
struct Crosshair {
    color: vec4<f32>,
    half_extent: vec2<f32>,
    _pad: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> crosshair: Crosshair;

@vertex
fn vs_crosshair(@builtin(vertex_index) index: u32) -> @builtin(position) vec4<f32> {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
    );
    return vec4<f32>(corners[index] * crosshair.half_extent, 0.0, 1.0);
}

@fragment
fn fs_crosshair() -> @location(0) vec4<f32> {
    return crosshair.color;
}
"#;
