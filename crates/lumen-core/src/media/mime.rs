//! MIME type helpers for media payloads.
//!
//! Covers the media families the generation and understanding nodes
//! accept: still images, video, and audio. Anything outside these
//! families is rejected by [`MediaItem`](super::MediaItem) validation.

/// Returns the MIME type for a file extension, if recognized.
#[must_use]
pub fn mime_for_extension(extension: &str) -> Option<&'static str> {
    let mime = match extension.to_ascii_lowercase().as_str() {
        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        // Videos
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "avi" => "video/avi",
        "mov" => "video/quicktime",
        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        _ => return None,
    };
    Some(mime)
}

/// Returns the canonical file extension for a MIME type, if recognized.
#[must_use]
pub fn extension_for_mime(mime: &str) -> Option<&'static str> {
    let extension = match mime {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        "video/mp4" => "mp4",
        "video/webm" => "webm",
        "video/avi" => "avi",
        "video/quicktime" => "mov",
        "audio/mpeg" => "mp3",
        "audio/wav" => "wav",
        "audio/ogg" => "ogg",
        "audio/flac" => "flac",
        _ => return None,
    };
    Some(extension)
}

/// Returns `true` if the MIME type is a recognized media type.
#[must_use]
pub fn is_supported_mime(mime: &str) -> bool {
    extension_for_mime(mime).is_some()
}

/// Detects a media MIME type from magic bytes, if possible.
#[must_use]
pub fn detect_mime_from_bytes(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("image/png");
    }
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }
    if data.len() >= 12 && data.starts_with(b"RIFF") {
        if &data[8..12] == b"WEBP" {
            return Some("image/webp");
        }
        if &data[8..12] == b"WAVE" {
            return Some("audio/wav");
        }
        if &data[8..12] == b"AVI " {
            return Some("video/avi");
        }
    }
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Some("image/gif");
    }
    if data.len() >= 12 && &data[4..8] == b"ftyp" {
        // Quicktime brands start with "qt"; everything else is treated as MP4.
        if &data[8..10] == b"qt" {
            return Some("video/quicktime");
        }
        return Some("video/mp4");
    }
    if data.starts_with(&[0x1A, 0x45, 0xDF, 0xA3]) {
        return Some("video/webm");
    }
    if data.starts_with(b"ID3") || data.starts_with(&[0xFF, 0xFB]) || data.starts_with(&[0xFF, 0xF3])
    {
        return Some("audio/mpeg");
    }
    if data.starts_with(b"OggS") {
        return Some("audio/ogg");
    }
    if data.starts_with(b"fLaC") {
        return Some("audio/flac");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("png"), Some("image/png"));
        assert_eq!(mime_for_extension("JPEG"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("mov"), Some("video/quicktime"));
        assert_eq!(mime_for_extension("exe"), None);
    }

    #[test]
    fn test_extension_roundtrip() {
        for ext in ["png", "webp", "mp4", "wav", "ogg"] {
            let mime = mime_for_extension(ext).unwrap();
            assert_eq!(extension_for_mime(mime), Some(ext));
        }
    }

    #[test]
    fn test_is_supported_mime() {
        assert!(is_supported_mime("image/png"));
        assert!(is_supported_mime("audio/flac"));
        assert!(!is_supported_mime("application/pdf"));
        assert!(!is_supported_mime("application/octet-stream"));
    }

    #[test]
    fn test_detect_png() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        assert_eq!(detect_mime_from_bytes(&data), Some("image/png"));
    }

    #[test]
    fn test_detect_jpeg() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
        assert_eq!(detect_mime_from_bytes(&data), Some("image/jpeg"));
    }

    #[test]
    fn test_detect_webp_and_wav() {
        let webp = b"RIFF\x00\x00\x00\x00WEBPVP8 ";
        assert_eq!(detect_mime_from_bytes(webp), Some("image/webp"));

        let wav = b"RIFF\x00\x00\x00\x00WAVEfmt ";
        assert_eq!(detect_mime_from_bytes(wav), Some("audio/wav"));
    }

    #[test]
    fn test_detect_mp4() {
        let mp4 = b"\x00\x00\x00\x20ftypisom\x00\x00\x02\x00";
        assert_eq!(detect_mime_from_bytes(mp4), Some("video/mp4"));
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect_mime_from_bytes(b"plain text"), None);
        assert_eq!(detect_mime_from_bytes(&[]), None);
    }
}
