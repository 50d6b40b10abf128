//! GLSL shaders for the point-cloud pass.

pub const VERTEX_SHADER_SOURCE: &str = r#"
    precision highp float;

    attribute vec3 a_position;
    attribute vec3 a_color;

    uniform mat4 u_viewProjection;
    uniform mat4 u_model;
    uniform float u_pointScale;      // particle size * half viewport height

    varying lowp vec3 v_color;
    varying mediump float v_fogDepth;

    void main() {
        vec4 projected = u_viewProjection * u_model * vec4(a_position, 1.0);
        gl_Position = projected;

        // Size attenuation: world-unit size shrinks with distance
        gl_PointSize = u_pointScale / projected.w;

        v_color = a_color;
        v_fogDepth = projected.w;
    }
"#;

pub const FRAGMENT_SHADER_SOURCE: &str = r#"
    precision mediump float;

    uniform float u_opacity;
    uniform vec3 u_fogColor;
    uniform float u_fogDensity;

    varying lowp vec3 v_color;
    varying mediump float v_fogDepth;

    void main() {
        vec2 coord = gl_PointCoord - 0.5;
        float dist_sq = dot(coord, coord);

        // Soft round point: fade between radius 0.25 and 0.5 (squared)
        float alpha = 1.0 - smoothstep(0.0625, 0.25, dist_sq);

        // Exponential-squared fog blends distant points into the page
        float fog = 1.0 - exp(-u_fogDensity * u_fogDensity * v_fogDepth * v_fogDepth);
        vec3 color = mix(v_color, u_fogColor, clamp(fog, 0.0, 1.0));

        gl_FragColor = vec4(color, alpha * u_opacity);
    }
"#;
