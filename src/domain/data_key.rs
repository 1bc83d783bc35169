//! Keys naming the kind of data passed through an augmentation pipeline.

use cvkit_derive::Constant;

/// Annotation kind attached to a tensor flowing through a pipeline.
///
/// Geometric augmentations use the key to decide how a tensor is transformed:
/// images and masks are resampled, boxes and keypoints are mapped through the
/// same transform, class labels pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Constant)]
pub enum DataKey {
    /// Image tensor
    Input = 0,
    /// Segmentation mask
    Mask = 1,
    /// Boxes given as four corner points
    Bbox = 2,
    /// Boxes given as `(x_min, y_min, x_max, y_max)`
    BboxXyxy = 3,
    /// Boxes given as `(x, y, width, height)`
    BboxXywh = 4,
    /// Keypoint coordinates
    Keypoints = 5,
    /// Class labels
    Class = 6,
}

impl DataKey {
    /// Returns true for the bounding-box keys.
    pub fn is_bbox(self) -> bool {
        matches!(self, DataKey::Bbox | DataKey::BboxXyxy | DataKey::BboxXywh)
    }

    /// Returns true if geometric transforms resample this data as an image.
    pub fn is_image_like(self) -> bool {
        matches!(self, DataKey::Input | DataKey::Mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::Constant;

    #[test]
    fn test_snake_case_names() {
        assert_eq!(DataKey::BboxXyxy.name(), "BBOX_XYXY");
        assert_eq!(DataKey::BboxXywh.name(), "BBOX_XYWH");
        assert_eq!(DataKey::resolve("bbox_xyxy").unwrap(), DataKey::BboxXyxy);
        assert!(!DataKey::contains("bboxxyxy"));
    }

    #[test]
    fn test_key_groups() {
        let boxes: Vec<_> = DataKey::iter().filter(|k| k.is_bbox()).collect();
        assert_eq!(boxes, vec![DataKey::Bbox, DataKey::BboxXyxy, DataKey::BboxXywh]);
        assert!(DataKey::Mask.is_image_like());
        assert!(!DataKey::Class.is_image_like());
    }

    #[test]
    fn test_registry_display() {
        assert_eq!(
            DataKey::registry().to_string(),
            "DataKey.INPUT | DataKey.MASK | DataKey.BBOX | DataKey.BBOX_XYXY | \
             DataKey.BBOX_XYWH | DataKey.KEYPOINTS | DataKey.CLASS"
        );
    }
}
