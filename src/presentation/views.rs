//! Inline HTML for the browser front end. Every interpolated value is either
//! a `ResultId` or an `OutputFilename`, both of which are restricted to a
//! character set that needs no escaping.

use crate::domain::{OutputFilename, ResultId};

const STYLE: &str = r#"
    body { background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%); min-height: 100vh; margin: 0; font-family: 'Segoe UI', Arial, sans-serif; display: flex; align-items: center; justify-content: center; }
    .container { background: #fff; border-radius: 16px; box-shadow: 0 4px 24px rgba(30,60,114,0.15); padding: 40px 32px 32px 32px; max-width: 400px; width: 100%; text-align: center; }
    h1 { color: #1e3c72; margin-bottom: 12px; }
    .subtitle { color: #2a5298; font-size: 1.1rem; margin-bottom: 28px; }
    .filename { color: #1e3c72; font-family: monospace; word-break: break-all; }
    form { display: flex; flex-direction: column; gap: 18px; }
    input[type="file"] { border: 2px solid #2a5298; border-radius: 8px; padding: 8px; background: #f4f8fb; color: #1e3c72; font-size: 1rem; }
    button, .download-btn { background: linear-gradient(90deg, #1e3c72 0%, #2a5298 100%); color: #fff; border: none; border-radius: 8px; padding: 12px 0; font-size: 1.1rem; font-weight: bold; cursor: pointer; transition: background 0.2s; }
    button:hover, .download-btn:hover { background: linear-gradient(90deg, #2a5298 0%, #1e3c72 100%); }
    .download-btn { width: 100%; margin-top: 18px; text-decoration: none; display: inline-block; }
    .audio-player { margin: 24px 0; }
    .try-another-btn { background: #fff; color: #2a5298; border: 2px solid #2a5298; border-radius: 8px; padding: 12px 0; font-size: 1.1rem; font-weight: bold; width: 100%; margin-top: 14px; text-decoration: none; display: inline-block; }
    .try-another-btn:hover { background: #2a5298; color: #fff; }
    .hint { color: #6b7a90; font-size: 0.9rem; }
"#;

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    <div class="container">
{body}
    </div>
</body>
</html>
"#
    )
}

pub fn upload_page(max_file_size_mb: usize) -> String {
    page(
        "Upload Audio for Noise Reduction",
        &format!(
            r#"        <h1>Audio Noise Remover</h1>
        <div class="subtitle">Easily remove background noise from your audio files. Upload your audio and get a cleaner, clearer sound in seconds!</div>
        <form action="/upload" method="post" enctype="multipart/form-data">
            <input type="file" name="audio_file" accept=".wav, .mp3, .flac, .ogg" required>
            <button type="submit">Upload and Process</button>
        </form>
        <p class="hint">Maximum file size: {max_file_size_mb} MB</p>"#
        ),
    )
}

pub fn result_page(id: &ResultId, filename: &OutputFilename) -> String {
    page(
        "Processed Audio Result",
        &format!(
            r#"        <h1>Noise Removed!</h1>
        <div class="subtitle">Listen to your cleaned audio below. You can play it or download it to your device.</div>
        <div class="filename">{filename}</div>
        <div class="audio-player">
            <audio controls style="width:100%">
                <source src="/preview/{id}" type="audio/wav">
                Your browser does not support the audio element.
            </audio>
        </div>
        <a href="/download/{id}" class="download-btn" download>Download Processed Audio</a>
        <a href="/" class="try-another-btn">Try Another</a>"#
        ),
    )
}

pub fn not_found_page() -> String {
    page(
        "Result Not Found",
        r#"        <h1>Result not found</h1>
        <div class="subtitle">This link has expired or never existed. Processed files are only kept for a limited time.</div>
        <a href="/" class="try-another-btn">Upload a File</a>"#,
    )
}
