use anyhow::{bail, Result};
use serde::Serialize;

/// One landmark of the catalog: a named, geolocated point with optional
/// descriptive text fields and an optional photo.
///
/// Text fields may contain the `@@BREAK@@` sentinel in place of line breaks;
/// the panel renderer expands it at display time.
#[derive(Debug, Clone)]
pub struct Landmark {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub address: Option<String>,
    pub founded: Option<String>,
    pub status: Option<String>,
    pub exposition: Option<String>,
    pub interesting: Option<String>,
    pub image_url: Option<String>,
}

/// Union bounding box over landmark coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.south && lat <= self.north && lng >= self.west && lng <= self.east
    }
}

/// Counts over the catalog, reported at startup.
#[derive(Debug, Clone, Copy)]
pub struct CatalogStats {
    pub total: usize,
    pub with_photo: usize,
    pub with_details: usize,
}

/// Read-only, ordered collection of landmarks. Built once at startup and
/// never mutated; records are addressed by their index.
#[derive(Debug, Clone)]
pub struct Catalog {
    landmarks: Vec<Landmark>,
}

impl Catalog {
    /// Validates every record and normalizes image paths. A malformed
    /// record is a startup defect, not a runtime condition.
    pub fn new(landmarks: Vec<Landmark>) -> Result<Self> {
        for landmark in &landmarks {
            validate(landmark)?;
        }
        let landmarks = landmarks
            .into_iter()
            .map(|mut l| {
                l.image_url = l.image_url.map(|u| normalize_image_path(&u));
                l
            })
            .collect();
        Ok(Self { landmarks })
    }

    pub fn get(&self, id: usize) -> Option<&Landmark> {
        self.landmarks.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter()
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Union bounding box over all landmark coordinates, `None` for an empty
    /// catalog. A single record degenerates to a point box.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let first = self.landmarks.first()?;
        let mut bounds = LatLngBounds {
            south: first.lat,
            west: first.lng,
            north: first.lat,
            east: first.lng,
        };
        for l in &self.landmarks[1..] {
            bounds.south = bounds.south.min(l.lat);
            bounds.north = bounds.north.max(l.lat);
            bounds.west = bounds.west.min(l.lng);
            bounds.east = bounds.east.max(l.lng);
        }
        Some(bounds)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            total: self.landmarks.len(),
            with_photo: self
                .landmarks
                .iter()
                .filter(|l| l.image_url.is_some())
                .count(),
            with_details: self
                .landmarks
                .iter()
                .filter(|l| l.exposition.is_some() || l.interesting.is_some())
                .count(),
        }
    }

    /// The built-in catalog of chemical/pharmaceutical landmarks of
    /// Saint Petersburg.
    pub fn builtin() -> Result<Self> {
        Self::new(vec![
            Landmark {
                name: "Аптека Пеля (первая аптека СПб + лаборатория)".into(),
                lat: 59.9401,
                lng: 30.2780,
                address: Some("📍 Адрес: 7-я линия В.О., 16–18".into()),
                founded: Some("⏳ Основан: 1720 – н.в.".into()),
                status: None,
                exposition: Some(
                    "💊 Экспозиция:@@BREAK@@- Старейшая аптека города, основана по указу Петра I.\
                     @@BREAK@@- В XIX веке принадлежала семье Пелей.\
                     @@BREAK@@- Сохранилась алхимическая башня-лаборатория."
                        .into(),
                ),
                interesting: Some(
                    "🧪 Интересное:@@BREAK@@- Здесь изготавливали лекарства для императорской \
                     семьи, а в башне проводили химические опыты.@@BREAK@@- В башне якобы \
                     хранился «философский камень» – на самом деле там находилась первая в \
                     России лаборатория по синтезу йода и брома."
                        .into(),
                ),
                image_url: Some("images\\aptpel.jpg".into()),
            },
            Landmark {
                name: "Музей истории медицины и фармации".into(),
                lat: 59.9321,
                lng: 30.3475,
                address: Some("📍 Адрес: ул. Введенского канала, 6А".into()),
                founded: Some("⏳ Основан: 2019 год".into()),
                status: Some("🏛 Статус: Частный музей при фармкомпании".into()),
                exposition: Some(
                    "💊 Экспозиция:@@BREAK@@- Аптечные весы XVIII–XX вв.\
                     @@BREAK@@- Подлинные рецепты с автографами Боткина и Павлова\
                     @@BREAK@@- Реконструкция кабинета провизора"
                        .into(),
                ),
                interesting: Some(
                    "🧪 Интересное:@@BREAK@@- Единственный в России «Яд-шкаф» с замком 1843 года\
                     @@BREAK@@- Интерактивная зона с запахами исторических лекарств"
                        .into(),
                ),
                image_url: Some("images\\mednfarm.jpg".into()),
            },
            Landmark {
                name: "Музей гигиены".into(),
                lat: 59.9341,
                lng: 30.3356,
                address: Some("📍 Адрес: ул. Итальянская, 25".into()),
                founded: Some("⏳ Основан: 1919 год".into()),
                status: Some("🏛 Статус: Научно-просветительский центр".into()),
                exposition: Some(
                    "💊 Экспозиция:@@BREAK@@- «Аптека гигиены» 1920-х с уникальными \
                     санпросветплакатами@@BREAK@@- Коллекция венерических симуляторов для \
                     обучения врачей"
                        .into(),
                ),
                interesting: Some(
                    "🧪 Интересное:@@BREAK@@- Хранится чемоданчик «Чумного доктора» 1897 года\
                     @@BREAK@@- Есть образцы советских презервативов 1930-х"
                        .into(),
                ),
                image_url: Some("images\\ggen.jpg".into()),
            },
            Landmark {
                name: "Музей при СПбГУ (Медицинский факультет)".into(),
                lat: 59.9392,
                lng: 30.2978,
                address: Some("📍 Адрес: Университетская наб., 7–9".into()),
                founded: Some("⏳ Основан: 1822 год".into()),
                status: Some("🏛 Статус: Ведомственный музей".into()),
                exposition: Some(
                    "💊 Экспозиция:@@BREAK@@- Первая в России учебная аптека (1826)\
                     @@BREAK@@- Гербарий лекарственных растений Палласа\
                     @@BREAK@@- Восковая модель «Человек-аптека» (1830)"
                        .into(),
                ),
                interesting: Some(
                    "🧪 Интересное:@@BREAK@@- Здесь Менделеев проводил опыты с лекарственными \
                     растворами@@BREAK@@- Сохранился «Рецептурный журнал» с пометками студентов"
                        .into(),
                ),
                image_url: Some("images\\spbgu2.jpg".into()),
            },
            Landmark {
                name: "СПХФУ (Санкт-Петербургский химико-фармацевтический университет)".into(),
                lat: 59.9709,
                lng: 30.3105,
                address: Some("📍 Адрес: ул. Профессора Попова, 14".into()),
                founded: Some("⏳ Основан: 1919 год".into()),
                status: Some("🏛 Статус: Действующий вуз с музеем".into()),
                exposition: Some(
                    "💊 Экспозиция:@@BREAK@@- Аптечная утварь 1920–1950-х\
                     @@BREAK@@- Первая советская машина для производства таблеток\
                     @@BREAK@@- Дипломы выпускников царского периода"
                        .into(),
                ),
                interesting: Some(
                    "🧪 Интересное:@@BREAK@@- В подвалах сохранился бункер для хранения опия \
                     (ныне лаборатория)"
                        .into(),
                ),
                image_url: Some("images\\sphfu.png".into()),
            },
        ])
    }
}

fn validate(landmark: &Landmark) -> Result<()> {
    if landmark.name.trim().is_empty() {
        bail!(
            "Landmark without a name at ({}, {})",
            landmark.lat,
            landmark.lng
        );
    }
    if !(-90.0..=90.0).contains(&landmark.lat) {
        bail!("Invalid latitude for {}: {}", landmark.name, landmark.lat);
    }
    if !(-180.0..=180.0).contains(&landmark.lng) {
        bail!("Invalid longitude for {}: {}", landmark.name, landmark.lng);
    }
    Ok(())
}

/// The source data carries Windows-style backslash separators in image
/// paths, which do not resolve as URLs. Normalized once at catalog
/// construction.
fn normalize_image_path(path: &str) -> String {
    path.replace('\\', "/")
}
