//! 画像ギャラリーの状態

use serde::{Deserialize, Serialize};

/// ギャラリーの1枚
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub title: String,
    pub url: String,
}

impl ImageRecord {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// 既定のギャラリー画像
pub fn default_images() -> Vec<ImageRecord> {
    vec![
        ImageRecord::new(
            "Centro Comercial",
            "https://cdn.discordapp.com/attachments/1392306767395815435/1392307098439913502/shopping-malls-los-angeles-1024x683.jpg?ex=687108c8&is=686fb748&hm=ba0e47a564de46c431ffc85a236a35a7bd382dc22bc9df76bf2b95fe5f40f3ec&",
        ),
        ImageRecord::new(
            "Tienda de Moda",
            "https://cdn.discordapp.com/attachments/1392306767395815435/1392307129703993409/donde-ir-de-compras.jpg?ex=687108cf&is=686fb74f&hm=0e8a22f70a315f1883f6ce17f6a939f7217651c865b6244c342fa008208f9e67&",
        ),
        ImageRecord::new(
            "Galería Comercial",
            "https://cdn.discordapp.com/attachments/1392306767395815435/1392307164403466381/ovation.jpg?ex=687108d7&is=686fb757&hm=5a1a76928d19f725f370469d32da5ddc1fa6375f19516a31d130b43ff6ef69d8&",
        ),
    ]
}

/// ギャラリーページの状態（選択画像とモーダル表示）
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    images: Vec<ImageRecord>,
    selected: Option<ImageRecord>,
    show_modal: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(default_images())
    }
}

impl GalleryState {
    pub fn new(images: Vec<ImageRecord>) -> Self {
        Self {
            images,
            selected: None,
            show_modal: false,
        }
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn selected(&self) -> Option<&ImageRecord> {
        self.selected.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.show_modal
    }

    /// カードをクリック: 画像を選択してモーダルを開く
    pub fn select(&mut self, image: ImageRecord) {
        self.selected = Some(image);
        self.show_modal = true;
    }

    /// インデックス指定で選択。範囲外なら何もしない
    pub fn open(&mut self, index: usize) -> bool {
        match self.images.get(index).cloned() {
            Some(image) => {
                self.select(image);
                true
            }
            None => false,
        }
    }

    /// モーダルを閉じて選択を解除
    pub fn close(&mut self) {
        self.show_modal = false;
        self.selected = None;
    }
}
