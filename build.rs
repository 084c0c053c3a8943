fn main() {
    // Rerun if frontend changes
    println!("cargo:rerun-if-changed=frontend/");

    // Check if frontend directory exists
    let frontend_path = std::path::Path::new("frontend");
    if !frontend_path.exists() {
        eprintln!("Warning: frontend/ directory not found.");
        eprintln!("Build the frontend and copy its dist/* output to frontend/");

        // Create placeholder index.html for development
        std::fs::create_dir_all("frontend").ok();
        std::fs::write(
            "frontend/index.html",
            r#"<!DOCTYPE html>
<html>
<head>
    <title>Security Toolbox</title>
    <style>
        body { font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: #10141f; color: #eee; }
        .message { text-align: center; }
        code { background: #333; padding: 2px 8px; border-radius: 4px; }
    </style>
</head>
<body>
    <div class="message">
        <h1>Security Toolbox Backend</h1>
        <p>API is running. Frontend not embedded.</p>
        <p>Copy the built frontend into <code>frontend/</code> and rebuild.</p>
    </div>
</body>
</html>"#,
        )
        .ok();
    }
}
