//! Native file dialogs.

use crate::state::PickedFile;

/// Opens the native picker for a video file and reads it fully into
/// memory. Resolves to `None` when the dialog is dismissed.
pub async fn pick_video() -> Option<PickedFile> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Select Video")
        .add_filter("Video", &["mp4", "mov", "avi", "mkv", "webm", "m4v"])
        .add_filter("All Files", &["*"])
        .pick_file()
        .await?;

    let name = handle.file_name();
    let bytes = handle.read().await;
    tracing::debug!(file = %name, size = bytes.len(), "Video file picked");
    Some(PickedFile {
        content_type: content_type_for(&name),
        name,
        bytes,
    })
}

/// MIME type from the file extension; the server falls back to sniffing
/// when this is absent.
fn content_type_for(name: &str) -> Option<String> {
    let extension = name.rsplit_once('.')?.1.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "mp4" => "video/mp4",
        "m4v" => "video/x-m4v",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        _ => return None,
    };
    Some(mime.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_from_extension() {
        assert_eq!(content_type_for("clip.mp4").as_deref(), Some("video/mp4"));
        assert_eq!(content_type_for("CLIP.MOV").as_deref(), Some("video/quicktime"));
        assert_eq!(content_type_for("archive.bin"), None);
        assert_eq!(content_type_for("no-extension"), None);
    }
}
