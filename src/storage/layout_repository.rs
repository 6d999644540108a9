use crate::{
    config::GardenConfig,
    error::{GardenError, Result},
    model::{GardenLayout, LayoutDraft, LayoutPlacement, PlacementDraft, Plant},
    validation,
};
use slug::slugify;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the file holding the last issued layout id.
const ID_COUNTER_FILE: &str = ".id";

/// Flat-file store for garden layouts, one JSON file per layout.
pub struct LayoutRepository {
    layouts_path: PathBuf,
}

impl LayoutRepository {
    pub fn new(config: &GardenConfig, project_root: &Path) -> Self {
        Self {
            layouts_path: config.layouts_path(project_root),
        }
    }

    pub fn layouts_path(&self) -> &Path {
        &self.layouts_path
    }

    fn next_id(&self) -> Result<u64> {
        let counter_path = self.layouts_path.join(ID_COUNTER_FILE);

        let current = if counter_path.exists() {
            let content = std::fs::read_to_string(&counter_path)?;
            content.trim().parse::<u64>().map_err(|_| {
                GardenError::Storage(format!(
                    "Corrupt id counter at {}: '{}'",
                    counter_path.display(),
                    content.trim()
                ))
            })?
        } else {
            0
        };

        let next = current + 1;
        self.atomic_write(&counter_path, &next.to_string())?;
        Ok(next)
    }

    pub fn generate_filename(&self, id: u64, name: &str) -> String {
        let slug = slugify(name);
        let slug: String = slug.chars().take(50).collect();
        format!("{}--{}.json", id, slug)
    }

    pub fn create(&self, draft: LayoutDraft) -> Result<GardenLayout> {
        validation::validate_layout(&draft)?;
        std::fs::create_dir_all(&self.layouts_path)?;

        let layout = GardenLayout::new(self.next_id()?, draft);
        tracing::info!(id = layout.id, name = %layout.name, "Creating layout");

        let file_path = self
            .layouts_path
            .join(self.generate_filename(layout.id, &layout.name));
        if file_path.exists() {
            return Err(GardenError::Storage(format!(
                "File already exists: {}",
                file_path.display()
            )));
        }

        self.write_layout(&file_path, &layout)?;
        Ok(layout)
    }

    pub fn get(&self, id: u64) -> Result<GardenLayout> {
        let file_path = self.find_file_by_id(id)?;
        let content = std::fs::read_to_string(&file_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// All layouts, most recently updated first.
    pub fn list(&self) -> Result<Vec<GardenLayout>> {
        if !self.layouts_path.exists() {
            return Ok(Vec::new());
        }

        let mut layouts = Vec::new();
        for entry in std::fs::read_dir(&self.layouts_path)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().is_none_or(|e| e != "json") {
                continue;
            }
            match std::fs::read_to_string(&path) {
                Ok(content) => match serde_json::from_str::<GardenLayout>(&content) {
                    Ok(layout) => layouts.push(layout),
                    Err(e) => tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to parse layout file"
                    ),
                },
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read layout file"
                ),
            }
        }

        layouts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(layouts)
    }

    /// Replace a layout's editable fields. Existing placements must still
    /// fit inside the new dimensions.
    pub fn update(&self, id: u64, draft: LayoutDraft) -> Result<GardenLayout> {
        validation::validate_layout(&draft)?;
        let mut layout = self.get(id)?;
        tracing::info!(id, name = %draft.name, "Updating layout");

        layout.apply(draft);
        for placement in &layout.plants {
            let position = PlacementDraft {
                plant_id: placement.plant_id,
                grid_x: placement.grid_x,
                grid_y: placement.grid_y,
            };
            validation::validate_placement(&layout, &position)?;
        }
        layout.touch();
        self.save(&layout)?;
        Ok(layout)
    }

    pub fn delete(&self, id: u64) -> Result<()> {
        tracing::info!(id, "Deleting layout");
        let file_path = self.find_file_by_id(id)?;
        std::fs::remove_file(&file_path)?;
        Ok(())
    }

    /// Place a catalog plant on a layout.
    pub fn place_plant(
        &self,
        layout_id: u64,
        plant: &Plant,
        grid_x: u32,
        grid_y: u32,
    ) -> Result<LayoutPlacement> {
        let mut layout = self.get(layout_id)?;
        let draft = PlacementDraft {
            plant_id: plant.id,
            grid_x,
            grid_y,
        };
        validation::validate_placement(&layout, &draft)?;

        let placement = layout.place(draft);
        tracing::info!(
            layout = layout_id,
            plant = %plant.name,
            x = grid_x,
            y = grid_y,
            "Placing plant"
        );
        layout.touch();
        self.save(&layout)?;
        Ok(placement)
    }

    /// Write a layout back under its id, renaming the file when the name
    /// changed.
    fn save(&self, layout: &GardenLayout) -> Result<PathBuf> {
        let old_path = self.find_file_by_id(layout.id)?;
        let new_path = self
            .layouts_path
            .join(self.generate_filename(layout.id, &layout.name));

        self.write_layout(&new_path, layout)?;
        if old_path != new_path {
            std::fs::remove_file(&old_path)?;
        }
        Ok(new_path)
    }

    pub fn find_file_by_id(&self, id: u64) -> Result<PathBuf> {
        let prefix = format!("{}--", id);

        if self.layouts_path.exists() {
            for entry in std::fs::read_dir(&self.layouts_path)? {
                let path = entry?.path();
                let Some(filename) = path.file_name() else {
                    continue;
                };
                if path.is_file() && filename.to_string_lossy().starts_with(&prefix) {
                    return Ok(path);
                }
            }
        }

        Err(GardenError::NotFound(format!("Layout id: {}", id)))
    }

    fn write_layout(&self, path: &Path, layout: &GardenLayout) -> Result<()> {
        let content = serde_json::to_string_pretty(layout)?;
        self.atomic_write(path, &content)
    }

    /// Write through a temp file in the same directory, then rename.
    fn atomic_write(&self, target_path: &Path, content: &str) -> Result<()> {
        let target_dir = target_path.parent().ok_or_else(|| {
            GardenError::Storage("Target path has no parent directory".to_string())
        })?;
        std::fs::create_dir_all(target_dir)?;

        let mut temp_file = NamedTempFile::new_in(target_dir)
            .map_err(|e| GardenError::Storage(format!("Failed to create temp file: {}", e)))?;

        use std::io::Write;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| GardenError::Storage(format!("Failed to write to temp file: {}", e)))?;
        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| GardenError::Storage(format!("Failed to sync temp file: {}", e)))?;
        temp_file
            .persist(target_path)
            .map_err(|e| GardenError::Storage(format!("Failed to persist temp file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Difficulty};
    use tempfile::TempDir;

    fn setup_test_repo() -> (LayoutRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let repo = LayoutRepository::new(&GardenConfig::default(), temp_dir.path());
        (repo, temp_dir)
    }

    fn draft(name: &str) -> LayoutDraft {
        LayoutDraft {
            name: name.to_string(),
            width_feet: 4,
            height_feet: 8,
            grid_data: None,
        }
    }

    fn tomato() -> Plant {
        let mut plant = Plant::new("Tomato", Category::Vegetable, Difficulty::Moderate);
        plant.id = 1;
        plant
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let (repo, _temp_dir) = setup_test_repo();
        let first = repo.create(draft("North Bed")).unwrap();
        let second = repo.create(draft("South Bed")).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(repo.layouts_path().join("1--north-bed.json").exists());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let (repo, _temp_dir) = setup_test_repo();
        let first = repo.create(draft("Herbs")).unwrap();
        repo.delete(first.id).unwrap();
        let second = repo.create(draft("Herbs")).unwrap();
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_get_round_trips() {
        let (repo, _temp_dir) = setup_test_repo();
        let mut d = draft("Kitchen Garden");
        d.grid_data = Some(serde_json::json!({"cells": [[1, 2]]}));
        let created = repo.create(d).unwrap();

        let loaded = repo.get(created.id).unwrap();
        assert_eq!(loaded, created);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let (repo, _temp_dir) = setup_test_repo();
        assert!(matches!(repo.get(42), Err(GardenError::NotFound(_))));
        assert!(matches!(repo.delete(42), Err(GardenError::NotFound(_))));
    }

    #[test]
    fn test_id_prefix_does_not_match_longer_id() {
        let (repo, _temp_dir) = setup_test_repo();
        for i in 0..11 {
            repo.create(draft(&format!("Bed {}", i))).unwrap();
        }
        assert_eq!(repo.get(1).unwrap().name, "Bed 0");
        assert_eq!(repo.get(11).unwrap().name, "Bed 10");
    }

    #[test]
    fn test_update_renames_file_and_touches() {
        let (repo, _temp_dir) = setup_test_repo();
        let created = repo.create(draft("Old Name")).unwrap();

        let updated = repo.update(created.id, draft("New Name")).unwrap();
        assert_eq!(updated.name, "New Name");
        assert!(updated.updated_at >= created.updated_at);
        assert!(repo.layouts_path().join("1--new-name.json").exists());
        assert!(!repo.layouts_path().join("1--old-name.json").exists());
    }

    #[test]
    fn test_update_cannot_strand_placements() {
        let (repo, _temp_dir) = setup_test_repo();
        let created = repo.create(draft("Bed")).unwrap();
        repo.place_plant(created.id, &tomato(), 3, 7).unwrap();

        let mut smaller = draft("Bed");
        smaller.width_feet = 2;
        assert!(matches!(
            repo.update(created.id, smaller),
            Err(GardenError::Validation(_))
        ));
    }

    #[test]
    fn test_place_plant() {
        let (repo, _temp_dir) = setup_test_repo();
        let created = repo.create(draft("Bed")).unwrap();

        let placement = repo.place_plant(created.id, &tomato(), 1, 2).unwrap();
        assert_eq!(placement.id, 1);
        assert_eq!(placement.plant_id, 1);

        let layout = repo.get(created.id).unwrap();
        assert_eq!(layout.plants, vec![placement]);
        assert!(repo.place_plant(created.id, &tomato(), 4, 0).is_err());
    }

    #[test]
    fn test_list_most_recent_first() {
        let (repo, _temp_dir) = setup_test_repo();
        let first = repo.create(draft("First")).unwrap();
        repo.create(draft("Second")).unwrap();
        repo.update(first.id, draft("First Again")).unwrap();

        let names: Vec<_> = repo.list().unwrap().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["First Again", "Second"]);
    }

    #[test]
    fn test_list_skips_corrupt_files() {
        let (repo, _temp_dir) = setup_test_repo();
        repo.create(draft("Good")).unwrap();
        std::fs::write(repo.layouts_path().join("99--broken.json"), "{not json").unwrap();

        let layouts = repo.list().unwrap();
        assert_eq!(layouts.len(), 1);
    }

    #[test]
    fn test_list_empty_without_directory() {
        let (repo, _temp_dir) = setup_test_repo();
        assert!(repo.list().unwrap().is_empty());
    }
}
