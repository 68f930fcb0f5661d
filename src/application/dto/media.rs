use bytes::Bytes;

/// Which profile field an upload feeds. Each purpose maps to its own bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaPurpose {
    ProfilePicture,
    BackgroundVideo,
    BackgroundMusic,
}

impl MediaPurpose {
    pub fn bucket(&self) -> &'static str {
        match self {
            MediaPurpose::ProfilePicture => "profile-pictures",
            MediaPurpose::BackgroundVideo => "background-videos",
            MediaPurpose::BackgroundMusic => "background-music",
        }
    }

    pub fn from_route(segment: &str) -> Option<Self> {
        match segment {
            "profile-picture" => Some(MediaPurpose::ProfilePicture),
            "background-video" => Some(MediaPurpose::BackgroundVideo),
            "background-music" => Some(MediaPurpose::BackgroundMusic),
            _ => None,
        }
    }

    pub const ALL: [MediaPurpose; 3] = [
        MediaPurpose::ProfilePicture,
        MediaPurpose::BackgroundVideo,
        MediaPurpose::BackgroundMusic,
    ];
}

#[derive(Debug)]
pub struct UploadMediaDTO {
    pub id: String,
    pub purpose: MediaPurpose,
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}
