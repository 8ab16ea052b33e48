/// Round seed made of two 32-bit draws from `Math.random()`.
pub(crate) fn js_random_seed() -> u64 {
    let draw = || (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (draw() << 32) | draw()
}

/// Percent-decodes one location hash argument, so values can carry `&` as `%26`.
#[cfg(target_arch = "wasm32")]
pub(crate) fn decode_hash_arg(arg: &str) -> String {
    js_sys::decode_uri_component(arg)
        .map(String::from)
        .unwrap_or_else(|_| arg.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn decode_hash_arg(arg: &str) -> String {
    arg.to_string()
}
