//! テスト用ユーティリティ
//!
//! 複数のテストモジュールで使用される共通のカタログを提供します。
#![cfg(test)]

use crate::input::ts::parse_catalog;
use crate::ir::Catalog;

/// Excerpt of the English source catalog, in lupdate layout.
pub(crate) const SAMPLE_CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="en_US">
<context>
    <name>AddItemDialog</name>
    <message>
        <location filename="../src/additemdialog.ui" line="14"/>
        <source>Add Items to %1</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <location filename="../src/additemdialog.ui" line="83"/>
        <source>&amp;Quantity</source>
        <translation type="unfinished"></translation>
    </message>
</context>
<context>
    <name>Document</name>
    <message numerus="yes">
        <location filename="../src/document.cpp" line="201"/>
        <source>Added %n item(s)</source>
        <translation>
            <numerusform>Added %n item</numerusform>
            <numerusform>Added %n items</numerusform>
        </translation>
    </message>
    <message>
        <location filename="../src/document.cpp" line="839"/>
        <source>Could not parse the XML data in file %1:&lt;br /&gt;&lt;i&gt;Line %2, column %3: %4&lt;/i&gt;</source>
        <translation type="unfinished"></translation>
    </message>
    <message numerus="yes">
        <location filename="../src/document.cpp" line="886"/>
        <location filename="../src/document.cpp" line="944"/>
        <source>This file contains %n unknown item(s).&lt;br /&gt;&lt;br /&gt;Do you still want to open this file?</source>
        <translation>
            <numerusform>This file contains %n unknown item.&lt;br /&gt;&lt;br /&gt;Do you still want to open this file?</numerusform>
            <numerusform>This file contains %n unknown items.&lt;br /&gt;&lt;br /&gt;Do you still want to open this file?</numerusform>
        </translation>
    </message>
    <message>
        <location filename="../src/document.cpp" line="1433"/>
        <source>N</source>
        <comment>New</comment>
        <translation type="unfinished"></translation>
    </message>
</context>
<context>
    <name>HumanReadableTimeDelta</name>
    <message numerus="yes">
        <location filename="../src/utility/humanreadabletimedelta.cpp" line="28"/>
        <source>%n second(s)</source>
        <translation>
            <numerusform>%n second</numerusform>
            <numerusform>%n seconds</numerusform>
        </translation>
    </message>
</context>
</TS>"#;

/// German catalog with finished, unfinished and vanished entries.
pub(crate) const SAMPLE_CATALOG_DE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de">
<context>
    <name>Document</name>
    <message numerus="yes">
        <location filename="../src/document.cpp" line="201"/>
        <source>Added %n item(s)</source>
        <translation>
            <numerusform>%n Teil hinzugefügt</numerusform>
            <numerusform>%n Teile hinzugefügt</numerusform>
        </translation>
    </message>
    <message>
        <location filename="../src/document.cpp" line="1433"/>
        <source>N</source>
        <comment>New</comment>
        <translation>N</translation>
    </message>
    <message>
        <location filename="../src/document.cpp" line="1434"/>
        <source>U</source>
        <comment>Used</comment>
        <translation>G</translation>
    </message>
    <message>
        <location filename="../src/document.cpp" line="1500"/>
        <source>Reset differences</source>
        <translation type="unfinished">Unterschiede zurücksetzen</translation>
    </message>
    <message>
        <location filename="../src/document.cpp" line="1510"/>
        <source>Consolidate lots</source>
        <translation type="vanished">Posten zusammenfassen</translation>
    </message>
</context>
<context>
    <name>Window</name>
    <message>
        <location filename="../src/window.cpp" line="90"/>
        <source>Close</source>
        <translation>Schließen</translation>
    </message>
    <message>
        <location filename="../src/window.cpp" line="95"/>
        <source>Add Items to %1</source>
        <translation>Teile zu %1 hinzufügen</translation>
    </message>
</context>
</TS>"#;

/// Russian catalog: three numerus forms.
pub(crate) const SAMPLE_CATALOG_RU: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ru">
<context>
    <name>Document</name>
    <message numerus="yes">
        <location filename="../src/document.cpp" line="201"/>
        <source>Added %n item(s)</source>
        <translation>
            <numerusform>Добавлен %n предмет</numerusform>
            <numerusform>Добавлено %n предмета</numerusform>
            <numerusform>Добавлено %n предметов</numerusform>
        </translation>
    </message>
</context>
</TS>"#;

/// Parse one of the sample catalogs.
#[allow(clippy::expect_used)]
pub(crate) fn sample(text: &str) -> Catalog {
    parse_catalog(text).expect("sample catalogs are valid")
}
