fn main() {
    // vips is invoked as an external executable at runtime; nothing to link.
    // Tauri build will embed Windows resources (icons) if RC.EXE is available.
    tauri_build::build()
}
